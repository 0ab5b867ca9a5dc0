//! # User rows
//!
//! [`UserRow`] is the full `users` row as loaded by SQLx. The viewer never
//! writes users; the auth layer creates them. [`UserRow::to_user`] projects
//! the row onto [`store::User`], the serializable form handed to pages.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn to_user(&self) -> store::User {
        store::User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            email_verified: self.email_verified,
            image: self.image.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
