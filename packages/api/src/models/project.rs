use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::UserRow;

/// Full project record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub markup: Option<String>,
    pub user_id: i64,
    pub project_name: String,
    pub public: bool,
    pub validated: bool,
}

impl ProjectRow {
    /// Convert to the shared model, attaching the owner when it was loaded.
    pub fn to_project(&self, user: Option<&UserRow>) -> store::Project {
        store::Project {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            markup: self.markup.clone(),
            user_id: self.user_id,
            project_name: self.project_name.clone(),
            public: self.public,
            validated: self.validated,
            user: user.map(UserRow::to_user),
        }
    }
}
