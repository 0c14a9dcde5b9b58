//! Temporary staging artifacts used during materialization.
//!
//! A run stages the downloaded archive and its extracted contents in the
//! system temporary directory. Both paths carry a random suffix so that
//! concurrent invocations never collide, and both are removed on every exit
//! path: normal return and unwinding through drop, interrupts through a
//! signal handler that removes the same paths before terminating.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile, TempDir};

/// Scoped staging artifacts: the downloaded archive file and the extraction
/// directory. Dropping the value removes both.
pub struct Staging {
    archive: NamedTempFile,
    extract_dir: TempDir,
}

impl Staging {
    /// Creates the staging file and directory under the system temporary
    /// directory and registers an interrupt handler that removes them.
    ///
    /// # Errors
    /// * `Error::IoError` if either temporary path cannot be created
    pub fn new() -> Result<Self> {
        let archive = Builder::new()
            .prefix("game-")
            .suffix(".tar.gz")
            .tempfile()
            .map_err(Error::IoError)?;
        let extract_dir =
            Builder::new().prefix("game-").tempdir().map_err(Error::IoError)?;

        debug!("Staging archive at '{}'.", archive.path().display());
        debug!("Staging extraction at '{}'.", extract_dir.path().display());

        // One handler covers the whole process; a second registration
        // returns an error, which is ignored.
        let paths =
            vec![archive.path().to_path_buf(), extract_dir.path().to_path_buf()];
        let _ = ctrlc::set_handler(move || {
            remove_staged(&paths);
            std::process::exit(130);
        });

        Ok(Self { archive, extract_dir })
    }

    /// Path of the staged archive file.
    pub fn archive_path(&self) -> &Path {
        self.archive.path()
    }

    /// Path of the staged extraction directory.
    pub fn extract_path(&self) -> &Path {
        self.extract_dir.path()
    }
}

/// Removes staged paths, tolerating paths that were never created or are
/// already gone. Safe to call more than once.
pub fn remove_staged(paths: &[PathBuf]) {
    for path in paths {
        let removed = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        if let Err(err) = removed {
            if err.kind() != io::ErrorKind::NotFound {
                debug!("Failed to remove staged path '{}': {}", path.display(), err);
            }
        }
    }
}
