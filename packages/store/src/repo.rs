//! # Project store: abstract persistence for the public viewer
//!
//! The static-generation functions in [`crate::loader`] only need two reads,
//! so the persistence layer is hidden behind [`ProjectStore`]. The server
//! implements it on top of PostgreSQL (`api::db::PgProjectStore`); tests and
//! local previews use [`crate::MemoryStore`].
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`find_public`](ProjectStore::find_public) | Every project with `public = true`, in no particular order. |
//! | [`find_with_user`](ProjectStore::find_with_user) | One project by id together with its owner, or `None`. |
//!
//! A missing record is `Ok(None)`. `Err` is reserved for the backend itself
//! failing.

use std::future::Future;

use thiserror::Error;

use crate::models::Project;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("failed to serialize project: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Async read access to projects.
pub trait ProjectStore: Send + Sync {
    fn find_public(&self) -> impl Future<Output = Result<Vec<Project>, StoreError>> + Send;
    fn find_with_user(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Project>, StoreError>> + Send;
}
