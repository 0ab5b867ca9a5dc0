//! Session and validation checks of the project endpoints. All of them answer
//! before the database is touched, so no pool is configured here.

#![cfg(feature = "server")]

use api::auth::SESSION_USER_ID_KEY;
use api::client::{CHECK_PATH, CREATE_PATH};
use api::routes::project_routes;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

const SIGN_IN_PATH: &str = "/test/sign-in";

async fn sign_in(session: Session) -> StatusCode {
    match session.insert(SESSION_USER_ID_KEY, 7_i64).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn serve() -> String {
    let router = Router::new()
        .merge(project_routes())
        .route(SIGN_IN_PATH, post(sign_in))
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Sign in and return the session cookie to send back.
async fn session_cookie(http: &reqwest::Client, base: &str) -> String {
    let response = http
        .post(format!("{base}{SIGN_IN_PATH}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn post_json(
    http: &reqwest::Client,
    url: String,
    cookie: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut request = http.post(url).json(body);
    if let Some(cookie) = cookie {
        request = request.header(reqwest::header::COOKIE, cookie);
    }
    let response = request.send().await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_anonymous_requests_are_unauthorized() {
    let base = serve().await;
    let http = reqwest::Client::new();

    let (status, body) = post_json(&http, format!("{base}{CHECK_PATH}"), None, &json!("foo")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Not authenticated" }));

    let create = json!({ "project": { "markup": "{}", "projectName": "Landing" } });
    let (status, body) = post_json(&http, format!("{base}{CREATE_PATH}"), None, &create).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Not authenticated" }));
}

#[tokio::test]
async fn test_create_rejects_name_empty_after_stripping() {
    let base = serve().await;
    let http = reqwest::Client::new();
    let cookie = session_cookie(&http, &base).await;

    for name in ["", " - -\t"] {
        let create = json!({ "project": { "markup": "{}", "projectName": name } });
        let (status, body) =
            post_json(&http, format!("{base}{CREATE_PATH}"), Some(&cookie), &create).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "name {name:?}");
        assert_eq!(body, json!({ "error": "Project name is required" }));
    }
}

#[tokio::test]
async fn test_create_rejects_markup_that_is_not_json() {
    let base = serve().await;
    let http = reqwest::Client::new();
    let cookie = session_cookie(&http, &base).await;

    let create = json!({ "project": { "markup": "<div>", "projectName": "Landing" } });
    let (status, body) =
        post_json(&http, format!("{base}{CREATE_PATH}"), Some(&cookie), &create).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Project markup is not valid JSON" }));
}
