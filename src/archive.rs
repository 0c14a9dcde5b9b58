//! Archive extraction and placement of the template into the project
//! directory. Template archives are gzip compressed tarballs, the export
//! format used by source hosting services; those exports wrap the repository
//! contents in a single top-level directory.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use log::debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::Archive;
use walkdir::WalkDir;

/// Unpacks the gzip compressed tarball at `archive_path` into `dest`.
///
/// # Errors
/// * `Error::ArchiveError` if the archive cannot be decompressed or unpacked
pub fn unpack_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    debug!("Extracting '{}' to '{}'.", archive_path.display(), dest.display());

    let file = File::open(archive_path).map_err(Error::IoError)?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.unpack(dest).map_err(|e| Error::ArchiveError(e.to_string()))?;

    Ok(())
}

/// Returns the single top-level directory of an extracted archive.
///
/// # Errors
/// * `Error::ArchiveError` if the extraction directory is empty, holds more
///   than one entry, or its only entry is not a directory
pub fn single_top_level(extract_dir: &Path) -> Result<PathBuf> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(extract_dir).map_err(Error::IoError)? {
        entries.push(entry.map_err(Error::IoError)?.path());
    }

    match entries.as_slice() {
        [] => Err(Error::ArchiveError("archive is empty".to_string())),
        [single] if single.is_dir() => Ok(single.clone()),
        [single] => Err(Error::ArchiveError(format!(
            "expected a top-level directory, found file '{}'",
            single.display()
        ))),
        _ => Err(Error::ArchiveError(format!(
            "expected a single top-level directory, found {} entries",
            entries.len()
        ))),
    }
}

/// Recursively copies the contents of `source_dir` into `target_dir`,
/// creating `target_dir` and any intermediate directories.
pub fn copy_tree(source_dir: &Path, target_dir: &Path) -> Result<()> {
    debug!("Copying '{}' to '{}'.", source_dir.display(), target_dir.display());

    for dir_entry in WalkDir::new(source_dir) {
        let entry = dir_entry.map_err(|e| Error::ArchiveError(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|e| Error::ArchiveError(e.to_string()))?;
        let target = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }

    Ok(())
}
