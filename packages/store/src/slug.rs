//! Project path identifiers.
//!
//! A public project page lives at `/project/public/<id>-<projectName>`. The
//! identifier is derived, never stored. Names are not escaped, so only the
//! segment before the first `-` is meaningful when reading one back.

use thiserror::Error;

/// Separator between the numeric id and the project name.
pub const SEPARATOR: char = '-';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("identifier has no id segment")]
    Empty,
    #[error("invalid project id: {0:?}")]
    InvalidId(String),
}

/// Build the identifier for a project.
pub fn project_slug(id: i64, project_name: &str) -> String {
    format!("{id}{SEPARATOR}{project_name}")
}

/// Extract the project id from an identifier such as `"42-my-project"`.
pub fn slug_id(slug: &str) -> Result<i64, SlugError> {
    let prefix = slug.split(SEPARATOR).next().unwrap_or_default();
    if prefix.is_empty() {
        return Err(SlugError::Empty);
    }
    prefix
        .parse::<i64>()
        .map_err(|_| SlugError::InvalidId(prefix.to_string()))
}

/// Strip whitespace and hyphens from a project name before it is submitted.
pub fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != SEPARATOR)
        .collect()
}
