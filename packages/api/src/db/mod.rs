//! # Database module: PostgreSQL pool and the project store
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx.
//!
//! - [`get_pool`]: lazy, process-wide `&'static PgPool`. The first call reads
//!   `DATABASE_URL` (via `dotenvy`) and the pool size from [`crate::config`].
//! - [`PgProjectStore`]: [`store::ProjectStore`] over the `projects` and
//!   `users` tables, used by the static-generation server functions.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod projects;

#[cfg(feature = "server")]
pub use pool::get_pool;
#[cfg(feature = "server")]
pub use projects::PgProjectStore;
