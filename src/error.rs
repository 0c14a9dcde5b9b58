//! Error handling for create-boardzilla-game.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for the scaffolding pipeline.
///
/// Every failure mode of a run maps to one of these variants: usage errors
/// (invalid name or template), the target-directory conflict, acquisition
/// failures (download, extraction, manifest problems) and the dependency
/// installation failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a project name that does not match the allowed pattern
    #[error("Invalid project name '{name}': can only contain lowercase letters, digits, _ and -.")]
    InvalidProjectName { name: String },

    /// Represents a template selector outside the closed set of known templates
    #[error("Unknown template '{name}': must be one of {known}.")]
    UnknownTemplate { name: String, known: String },

    /// Represents a target directory that already exists
    #[error("{project_dir} already exists.")]
    ProjectDirExistsError { project_dir: String },

    /// Represents errors that occur while downloading the template archive
    #[error("Failed to download template archive: {0}.")]
    FetchError(#[from] reqwest::Error),

    /// Represents errors that occur while extracting or placing the archive
    #[error("Failed to extract template archive: {0}.")]
    ArchiveError(String),

    /// Represents missing or malformed manifests in the scaffolded project
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// Represents a dependency installation that exited unsuccessfully.
    /// The scaffolded project is left in place when this occurs.
    #[error("Dependency installation failed with {status}; the project was created but its dependencies are incomplete.")]
    InstallError { status: ExitStatus },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
