use sqlx::PgPool;
use store::{Project, ProjectStore, StoreError};

use crate::models::{ProjectRow, UserRow};

/// [`ProjectStore`] backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store over the shared process-wide pool.
    pub async fn shared() -> Result<Self, sqlx::Error> {
        Ok(Self::new(super::get_pool().await?.clone()))
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl ProjectStore for PgProjectStore {
    async fn find_public(&self) -> Result<Vec<Project>, StoreError> {
        let rows: Vec<ProjectRow> = sqlx::query_as("SELECT * FROM projects WHERE public = TRUE")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(rows.iter().map(|row| row.to_project(None)).collect())
    }

    async fn find_with_user(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let row: Option<ProjectRow> = sqlx::query_as("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(row.user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        Ok(Some(row.to_project(user.as_ref())))
    }
}
