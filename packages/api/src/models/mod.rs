//! Database rows and their conversion to the shared models.

#[cfg(feature = "server")]
mod project;
#[cfg(feature = "server")]
mod user;

#[cfg(feature = "server")]
pub use project::ProjectRow;
#[cfg(feature = "server")]
pub use user::UserRow;
