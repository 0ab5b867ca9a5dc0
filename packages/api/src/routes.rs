//! # Project endpoints: `POST /api/project/check` and `POST /api/project/create`
//!
//! Plain axum handlers rather than server functions: the check endpoint takes
//! a bare JSON string as its body, which the server-function encoding cannot
//! express. Both require a signed-in user (see [`crate::auth`]).
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `POST /api/project/check` | `"name"` | `{ "exists": bool }`: whether the user already owns a project with that name (after stripping whitespace and hyphens) |
//! | `POST /api/project/create` | `{ "project": { "markup", "projectName" } }` | `{ "project": Project }`, created private and unvalidated |
//!
//! Failures answer `{ "error": "..." }` with a 4xx/5xx status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use store::slug::sanitize_project_name;
use thiserror::Error;
use tower_sessions::Session;
use tracing::{error, info};

use crate::auth::session_user_id;
use crate::client::{CreateProjectRequest, CreateProjectResponse, CHECK_PATH, CREATE_PATH};
use crate::db::get_pool;
use crate::models::ProjectRow;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Project name is required")]
    EmptyName,
    #[error("Project markup is not valid JSON")]
    InvalidMarkup,
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::EmptyName | ApiError::InvalidMarkup => StatusCode::BAD_REQUEST,
            ApiError::Session(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "project endpoint failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub exists: bool,
}

/// Routes for the project endpoints, to merge into the app router.
pub fn project_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(CHECK_PATH, post(check_project))
        .route(CREATE_PATH, post(create_project))
}

async fn require_user(session: &Session) -> Result<i64, ApiError> {
    session_user_id(session)
        .await?
        .ok_or(ApiError::Unauthenticated)
}

async fn check_project(
    session: Session,
    Json(name): Json<String>,
) -> Result<Json<CheckResponse>, ApiError> {
    let user_id = require_user(&session).await?;
    let project_name = sanitize_project_name(&name);
    let pool = get_pool().await?;

    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM projects WHERE user_id = $1 AND project_name = $2)",
    )
    .bind(user_id)
    .bind(&project_name)
    .fetch_one(pool)
    .await?;

    Ok(Json(CheckResponse { exists }))
}

async fn create_project(
    session: Session,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<CreateProjectResponse>, ApiError> {
    let user_id = require_user(&session).await?;

    let project_name = sanitize_project_name(&request.project.project_name);
    if project_name.is_empty() {
        return Err(ApiError::EmptyName);
    }
    if serde_json::from_str::<serde_json::Value>(&request.project.markup).is_err() {
        return Err(ApiError::InvalidMarkup);
    }

    let pool = get_pool().await?;
    let row: ProjectRow = sqlx::query_as(
        "INSERT INTO projects (markup, user_id, project_name) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&request.project.markup)
    .bind(user_id)
    .bind(&project_name)
    .fetch_one(pool)
    .await?;

    info!(id = row.id, user_id, project_name = %row.project_name, "project created");

    Ok(Json(CreateProjectResponse {
        project: row.to_project(None),
    }))
}
