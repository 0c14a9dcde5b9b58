//! The closed registry of known starter templates.
//! Selectors map to repository names under the boardzilla GitHub
//! organization. The mapping is kept as data so future templates are
//! additions to the table, not code changes.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Known template selectors and the repositories they resolve to.
const KNOWN_TEMPLATES: &[(&str, &str)] = &[("empty", "boardzilla-starter-game")];

/// The selector used when `--template` is not given.
pub const DEFAULT_SELECTOR: &str = "empty";

/// A resolved template: a repository whose archive export gets scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// The selector the user chose
    pub selector: String,
    /// Repository name the selector resolved to
    pub repo: String,
}

impl Template {
    /// URL of the tarball export of the template repository's default branch.
    pub fn archive_url(&self) -> String {
        format!("https://github.com/boardzilla/{}/tarball/master/", self.repo)
    }
}

/// Returns the registry of known templates, in declaration order.
pub fn registry() -> IndexMap<&'static str, &'static str> {
    KNOWN_TEMPLATES.iter().copied().collect()
}

/// Lists the known selectors, for error messages and help text.
pub fn known_selectors() -> Vec<&'static str> {
    registry().keys().copied().collect()
}

/// Resolves a template selector against the registry.
///
/// # Errors
/// * `Error::UnknownTemplate` if the selector is not in the closed set
pub fn resolve(selector: &str) -> Result<Template> {
    match registry().get(selector) {
        Some(repo) => Ok(Template {
            selector: selector.to_string(),
            repo: (*repo).to_string(),
        }),
        None => Err(Error::UnknownTemplate {
            name: selector.to_string(),
            known: known_selectors().join(", "),
        }),
    }
}
