//! Session lookups for the signed-in user.
//!
//! Sign-in itself happens elsewhere; it stores the user's id in the session
//! under [`SESSION_USER_ID_KEY`]. This crate only reads it back.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{session_user_id, SESSION_USER_ID_KEY};
