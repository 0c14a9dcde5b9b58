use create_boardzilla_game::staging::{remove_staged, Staging};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_staging_paths_exist_until_drop() {
    let staging = Staging::new().unwrap();
    let archive = staging.archive_path().to_path_buf();
    let extract = staging.extract_path().to_path_buf();

    assert!(archive.exists());
    assert!(extract.is_dir());

    drop(staging);

    assert!(!archive.exists());
    assert!(!extract.exists());
}

#[test]
fn test_staging_paths_are_unique() {
    let first = Staging::new().unwrap();
    let second = Staging::new().unwrap();

    assert_ne!(first.archive_path(), second.archive_path());
    assert_ne!(first.extract_path(), second.extract_path());
}

#[test]
fn test_remove_staged_removes_file_and_directory() {
    let scratch = TempDir::new().unwrap();
    let file = scratch.path().join("game-test.tar.gz");
    let dir = scratch.path().join("game-test");
    fs::write(&file, "archive").unwrap();
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("entry"), "contents").unwrap();

    remove_staged(&[file.clone(), dir.clone()]);

    assert!(!file.exists());
    assert!(!dir.exists());
}

#[test]
fn test_remove_staged_tolerates_missing_paths() {
    let scratch = TempDir::new().unwrap();
    let never_created = scratch.path().join("game-never-created");

    // Must not fail on paths that were never created, and must stay
    // idempotent across repeated calls.
    remove_staged(&[never_created.clone()]);
    remove_staged(&[never_created]);
}
