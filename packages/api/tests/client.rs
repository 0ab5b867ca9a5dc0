//! Client actions against a local stand-in for the project endpoints.

use std::sync::{Arc, Mutex};

use api::client::{CHECK_PATH, CREATE_PATH};
use api::{ClientError, ProjectClient};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<(String, String)>>>,
}

fn record(captured: &Captured, headers: &HeaderMap, body: String) {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    captured.bodies.lock().unwrap().push((content_type, body));
}

async fn check(State(captured): State<Captured>, headers: HeaderMap, body: String) -> String {
    record(&captured, &headers, body);
    r#"{"exists":false,"extra":[1,2]}"#.to_string()
}

async fn create(State(captured): State<Captured>, headers: HeaderMap, body: String) -> String {
    let request: Value = serde_json::from_str(&body).unwrap();
    record(&captured, &headers, body);
    json!({
        "project": {
            "id": 12,
            "createdAt": "2021-01-01T00:00:00Z",
            "updatedAt": "2021-01-01T00:00:00Z",
            "markup": request["project"]["markup"],
            "userId": 3,
            "projectName": request["project"]["projectName"],
            "public": false,
            "validated": false
        }
    })
    .to_string()
}

async fn not_json() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn capturing_server() -> (ProjectClient, Captured) {
    let captured = Captured::default();
    let router = Router::new()
        .route(CHECK_PATH, post(check))
        .route(CREATE_PATH, post(create))
        .with_state(captured.clone());
    (ProjectClient::new(serve(router).await), captured)
}

#[tokio::test]
async fn test_check_user_sends_bare_string() {
    let (client, captured) = capturing_server().await;

    let response = client.check_user("foo").await.unwrap();
    assert_eq!(response, json!({ "exists": false, "extra": [1, 2] }));

    let bodies = captured.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].0, "application/json");
    assert_eq!(bodies[0].1, r#""foo""#);
}

#[tokio::test]
async fn test_check_user_does_not_sanitize() {
    let (client, captured) = capturing_server().await;

    client.check_user("My Project-1").await.unwrap();
    client.check_user(r#"a "b""#).await.unwrap();

    let bodies = captured.bodies.lock().unwrap();
    assert_eq!(bodies[0].1, r#""My Project-1""#);
    assert_eq!(bodies[1].0, "application/json");
    assert_eq!(bodies[1].1, r#""a \"b\"""#);
}

#[tokio::test]
async fn test_create_project_strips_name_and_returns_project() {
    let (client, captured) = capturing_server().await;

    let project = client
        .create_project(r#"{"root":{"id":"root"}}"#, "My Project")
        .await
        .unwrap();
    assert_eq!(project.id, 12);
    assert_eq!(project.project_name, "MyProject");
    assert_eq!(project.markup.as_deref(), Some(r#"{"root":{"id":"root"}}"#));
    assert!(project.user.is_none());

    let bodies = captured.bodies.lock().unwrap();
    let sent: Value = serde_json::from_str(&bodies[0].1).unwrap();
    assert_eq!(
        sent,
        json!({ "project": { "markup": r#"{"root":{"id":"root"}}"#, "projectName": "MyProject" } })
    );
}

#[tokio::test]
async fn test_non_json_response_is_decode_error() {
    let router = Router::new()
        .route(CHECK_PATH, post(not_json))
        .route(CREATE_PATH, post(not_json));
    let client = ProjectClient::new(serve(router).await);

    assert!(matches!(
        client.check_user("x").await,
        Err(ClientError::Decode(_))
    ));
    assert!(matches!(
        client.create_project("{}", "x").await,
        Err(ClientError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ProjectClient::new(format!("http://{addr}"));
    assert!(matches!(
        client.check_user("x").await,
        Err(ClientError::Http(_))
    ));
}
