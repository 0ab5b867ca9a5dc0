//! # API crate: server functions, endpoints and client actions for the project viewer
//!
//! Everything that crosses the network lives here.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Reads the signed-in user's id from the session |
//! | [`client`] | none | `reqwest` wrappers for `POST /api/project/check` and `POST /api/project/create` |
//! | [`config`] | `server` | Loads `viewer.toml` + environment overrides |
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton) and [`db::PgProjectStore`] |
//! | [`models`] | `server` | SQLx rows (`UserRow`, `ProjectRow`) and their projection onto the shared models |
//! | [`routes`] | `server` | axum handlers behind the two project endpoints |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with full server logic (behind `#[cfg(feature = "server")]`)
//! and once as a thin client stub.
//!
//! - `get_public_paths`: the static path list of public project pages
//! - `get_public_project`: the props of one public project page

use dioxus::prelude::*;

pub mod auth;
pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

pub use client::{ClientError, ProjectClient};
pub use store::{Project, ProjectProps, StaticPaths, StaticProps, User};

/// List every public project page.
#[cfg(feature = "server")]
#[get("/api/project/paths")]
pub async fn get_public_paths() -> Result<StaticPaths, ServerFnError> {
    let projects = db::PgProjectStore::shared()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    store::list_public_identifiers(&projects)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/project/paths")]
pub async fn get_public_paths() -> Result<StaticPaths, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Load the props for a public project page from its `"<id>-<name>"` slug.
#[cfg(feature = "server")]
#[get("/api/project/public/:slug")]
pub async fn get_public_project(slug: String) -> Result<StaticProps<ProjectProps>, ServerFnError> {
    let projects = db::PgProjectStore::shared()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    store::load_by_identifier(&projects, &slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/project/public/:slug")]
pub async fn get_public_project(slug: String) -> Result<StaticProps<ProjectProps>, ServerFnError> {
    let _ = slug;
    Err(ServerFnError::new("Server only"))
}
