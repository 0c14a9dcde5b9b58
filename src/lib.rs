//! create-boardzilla-game scaffolds a new Boardzilla game project from a
//! remote starter template, rewrites the generated manifests with the chosen
//! project name and installs the project dependencies.

/// Archive extraction and placement into the project directory
pub mod archive;

/// Command-line interface module for the application
pub mod cli;

/// Error types and handling for the application
pub mod error;

/// Template archive download
pub mod fetch;

/// Dependency installation for the scaffolded project
pub mod install;

/// Manifest rewriting for the scaffolded project
/// Handles the package descriptor (package.json) and the game
/// descriptor (game.v1.json)
pub mod manifest;

/// Project naming rules: validation and derived names
pub mod project;

/// Temporary staging artifacts and their cleanup
pub mod staging;

/// The closed registry of known starter templates
pub mod template;
