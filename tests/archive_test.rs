use create_boardzilla_game::archive::{copy_tree, single_top_level, unpack_archive};
use create_boardzilla_game::error::Error;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// Builds a source tree resembling a starter template export.
fn make_template_tree(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("package.json"), r#"{"name": "starter"}"#).unwrap();
    fs::write(root.join("game.v1.json"), r#"{"name": "starter"}"#).unwrap();
    fs::write(root.join("src/index.ts"), "export {};\n").unwrap();
}

/// Tars `source` under `prefix` into a gzip compressed archive at `dest`.
fn make_tarball(dest: &Path, prefix: &str, source: &Path) {
    let file = File::create(dest).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(prefix, source).unwrap();
    builder.into_inner().unwrap().finish().unwrap();
}

#[test]
fn test_unpack_and_single_top_level() {
    let source = TempDir::new().unwrap();
    make_template_tree(source.path());

    let staging = TempDir::new().unwrap();
    let archive_path = staging.path().join("template.tar.gz");
    make_tarball(&archive_path, "boardzilla-starter-game-abc123", source.path());

    let extract_dir = TempDir::new().unwrap();
    unpack_archive(&archive_path, extract_dir.path()).unwrap();

    let top_level = single_top_level(extract_dir.path()).unwrap();
    assert!(top_level.ends_with("boardzilla-starter-game-abc123"));
    assert!(top_level.join("package.json").exists());
    assert!(top_level.join("src/index.ts").exists());
}

#[test]
fn test_unpack_invalid_archive() {
    let staging = TempDir::new().unwrap();
    let archive_path = staging.path().join("broken.tar.gz");
    fs::write(&archive_path, "this is not a tarball").unwrap();

    let extract_dir = TempDir::new().unwrap();
    assert!(matches!(
        unpack_archive(&archive_path, extract_dir.path()),
        Err(Error::ArchiveError(_))
    ));
}

#[test]
fn test_single_top_level_empty() {
    let extract_dir = TempDir::new().unwrap();

    match single_top_level(extract_dir.path()) {
        Err(Error::ArchiveError(message)) => assert!(message.contains("empty")),
        other => panic!("expected ArchiveError, got {:?}", other),
    }
}

#[test]
fn test_single_top_level_multiple_entries() {
    let extract_dir = TempDir::new().unwrap();
    fs::create_dir(extract_dir.path().join("one")).unwrap();
    fs::create_dir(extract_dir.path().join("two")).unwrap();

    assert!(matches!(
        single_top_level(extract_dir.path()),
        Err(Error::ArchiveError(_))
    ));
}

#[test]
fn test_single_top_level_file_entry() {
    let extract_dir = TempDir::new().unwrap();
    fs::write(extract_dir.path().join("README.md"), "readme").unwrap();

    assert!(matches!(
        single_top_level(extract_dir.path()),
        Err(Error::ArchiveError(_))
    ));
}

#[test]
fn test_copy_tree() {
    let source = TempDir::new().unwrap();
    make_template_tree(source.path());

    let base = TempDir::new().unwrap();
    let target = base.path().join("space-trader");
    copy_tree(source.path(), &target).unwrap();

    assert!(target.join("package.json").exists());
    assert!(target.join("src/index.ts").exists());
    assert!(!dir_diff::is_different(source.path(), &target).unwrap());
}
