//! Manifest rewriting for the scaffolded project.
//!
//! The generated project carries two JSON manifests: `package.json`, the
//! package descriptor, and `game.v1.json`, the game descriptor. Both are
//! loaded as generic JSON documents, mutated in place and persisted back
//! pretty-printed, preserving the key order of the source document.

use crate::error::{Error, Result};
use crate::project;
use log::debug;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// File name of the package descriptor.
pub const PROJECT_MANIFEST: &str = "package.json";

/// File name of the game descriptor.
pub const GAME_MANIFEST: &str = "game.v1.json";

fn load_manifest(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::ManifestError(format!(
            "template has no '{}'",
            path.display()
        )));
    }
    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::ManifestError(format!("'{}' is not valid JSON: {}", path.display(), e))
    })
}

fn save_manifest(path: &Path, manifest: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(manifest)
        .map_err(|e| Error::ManifestError(e.to_string()))?;
    fs::write(path, content).map_err(Error::IoError)
}

fn set_field(manifest: &mut Value, path: &Path, field: &str, value: &str) -> Result<()> {
    let object = manifest.as_object_mut().ok_or_else(|| {
        Error::ManifestError(format!("'{}' is not a JSON object", path.display()))
    })?;
    object.insert(field.to_string(), json!(value));
    Ok(())
}

/// Rewrites the name fields of both manifests in `project_dir`.
///
/// Sets the package descriptor's `name` to the project name, and the game
/// descriptor's `name` and `friendlyName` to the project name and its title
/// cased form respectively.
///
/// # Arguments
/// * `project_dir` - Root of the scaffolded project
/// * `project_name` - Validated project name
///
/// # Errors
/// * `Error::ManifestError` if either manifest is missing or malformed
pub fn rewrite_manifests(project_dir: &Path, project_name: &str) -> Result<()> {
    let package_path = project_dir.join(PROJECT_MANIFEST);
    let mut package = load_manifest(&package_path)?;
    set_field(&mut package, &package_path, "name", project_name)?;
    save_manifest(&package_path, &package)?;
    debug!("Rewrote '{}'.", package_path.display());

    let game_path = project_dir.join(GAME_MANIFEST);
    let mut game = load_manifest(&game_path)?;
    set_field(&mut game, &game_path, "name", project_name)?;
    set_field(&mut game, &game_path, "friendlyName", &project::to_title_case(project_name))?;
    save_manifest(&game_path, &game)?;
    debug!("Rewrote '{}'.", game_path.display());

    Ok(())
}
