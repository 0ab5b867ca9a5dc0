//! Session access.

use tower_sessions::Session;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user's id, if any.
pub async fn session_user_id(
    session: &Session,
) -> Result<Option<i64>, tower_sessions::session::Error> {
    session.get::<i64>(SESSION_USER_ID_KEY).await
}
