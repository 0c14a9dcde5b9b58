//! Project naming rules.
//! Validates the project name, derives the human friendly title used in the
//! game descriptor and resolves the target directory for the new project.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_-]+$").unwrap())
}

/// Returns true if `name` is a valid project name.
///
/// Valid names match `^[a-z0-9_-]+$`: lowercase letters, digits,
/// underscores and hyphens, at least one character.
pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Validates a project name, returning it unchanged on success.
///
/// # Errors
/// * `Error::InvalidProjectName` if the name does not match the pattern
pub fn validate_name(name: &str) -> Result<&str> {
    if is_valid_name(name) {
        Ok(name)
    } else {
        Err(Error::InvalidProjectName { name: name.to_string() })
    }
}

/// Converts a project name into a human friendly title.
///
/// Splits the name on runs of separator characters, capitalizes the first
/// letter of each token, lowercases the rest and joins the tokens with
/// single spaces. Empty tokens from leading or trailing separators are
/// dropped, so the output never contains double spaces.
///
/// # Examples
/// * `space-trader` becomes `Space Trader`
/// * `my-cool_game` becomes `My Cool Game`
pub fn to_title_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (first, rest) = token.split_at(1);
            format!("{}{}", first.to_ascii_uppercase(), rest.to_ascii_lowercase())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves the target directory for the project and verifies it is safe
/// to create.
///
/// # Arguments
/// * `base_dir` - Directory the project is created under, normally the
///   current working directory
/// * `name` - Validated project name
///
/// # Errors
/// * `Error::ProjectDirExistsError` if the target directory already exists
pub fn resolve_project_dir<P: AsRef<Path>>(base_dir: P, name: &str) -> Result<PathBuf> {
    let project_dir = base_dir.as_ref().join(name);
    if project_dir.exists() {
        return Err(Error::ProjectDirExistsError {
            project_dir: project_dir.display().to_string(),
        });
    }
    Ok(project_dir)
}
