//! Dependency installation for the scaffolded project.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs the dependency installation step for a scaffolded project.
/// Kept behind a trait so the pipeline can be exercised without spawning
/// the real package manager.
pub trait Installer {
    /// Installs dependencies in `project_dir`, returning the exit status
    /// of the underlying command.
    fn install(&self, project_dir: &Path) -> Result<ExitStatus>;
}

/// Installer backed by `npm install`.
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for NpmInstaller {
    /// Spawns `npm install` with the project root as working directory.
    /// Standard streams are inherited so npm's output goes straight to the
    /// invoking terminal.
    fn install(&self, project_dir: &Path) -> Result<ExitStatus> {
        let status = Command::new("npm")
            .arg("install")
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(Error::IoError)?;

        Ok(status)
    }
}
