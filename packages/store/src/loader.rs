//! # Static generation: path enumeration and per-page props
//!
//! Two pure async functions over a [`ProjectStore`], callable from a build
//! step, a server function, or a test without any UI runtime:
//!
//! - [`list_public_identifiers`] lists every public project as a page path.
//!   Paths not in the list are still resolved on demand (`fallback: true`).
//! - [`load_by_identifier`] turns one identifier back into page props.
//!
//! The output types serialize to the boundary JSON the pages consume:
//!
//! ```json
//! { "paths": [ { "params": { "slug": "42-Landing" } } ], "fallback": true }
//! { "props": { "projects": { "id": 42, "projectName": "Landing", ... } } }
//! ```
//!
//! `projects` holds a single record despite the plural key.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::Project;
use crate::repo::{ProjectStore, StoreError};
use crate::slug::{project_slug, slug_id};

/// The list of pages to prebuild.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticPaths {
    pub paths: Vec<PathEntry>,
    /// Resolve identifiers missing from `paths` at request time.
    pub fallback: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    pub params: SlugParams,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlugParams {
    pub slug: String,
}

/// Wrapper matching the `{ props: ... }` page contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticProps<T> {
    pub props: T,
}

/// Props for the public project page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectProps {
    pub projects: Option<Project>,
}

impl StaticPaths {
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.params.slug.as_str())
    }
}

/// Enumerate every public project as a page path.
pub async fn list_public_identifiers<S: ProjectStore>(
    store: &S,
) -> Result<StaticPaths, StoreError> {
    let projects = store.find_public().await?;
    debug!(count = projects.len(), "enumerated public projects");

    Ok(StaticPaths {
        paths: projects
            .iter()
            .map(|p| PathEntry {
                params: SlugParams {
                    slug: project_slug(p.id, &p.project_name),
                },
            })
            .collect(),
        fallback: true,
    })
}

/// Load the props for one project page from its identifier.
///
/// Only the id before the first `-` is used; the name suffix is not checked
/// against the stored name. An unknown id, or one that does not parse, gives
/// `projects: None`.
pub async fn load_by_identifier<S: ProjectStore>(
    store: &S,
    slug: &str,
) -> Result<StaticProps<ProjectProps>, StoreError> {
    let id = match slug_id(slug) {
        Ok(id) => id,
        Err(e) => {
            warn!(slug, error = %e, "unresolvable project identifier");
            return Ok(StaticProps {
                props: ProjectProps::default(),
            });
        }
    };

    let projects = match store.find_with_user(id).await? {
        Some(project) => Some(to_plain(&project)?),
        None => {
            debug!(id, "project not found");
            None
        }
    };

    Ok(StaticProps {
        props: ProjectProps { projects },
    })
}

/// Encode then decode so the props only carry what survives JSON.
fn to_plain(project: &Project) -> Result<Project, StoreError> {
    let encoded = serde_json::to_string(project)?;
    Ok(serde_json::from_str(&encoded)?)
}
