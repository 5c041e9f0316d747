//! End-to-end smoke tests for the full jobtrackd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use jobtrack_adapter_http_axum::state::AppState;
use jobtrack_adapter_http_axum::{cors, router};
use jobtrack_adapter_storage_sqlite_sqlx::{Config, SqliteApplicationRepository};
use jobtrack_app::services::application_service::ApplicationService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteApplicationRepository::new(db.pool().clone());
    let state = AppState::new(ApplicationService::new(repo));
    let cors = cors::layer([cors::DEFAULT_ALLOWED_ORIGIN]).expect("default origin is valid");

    router::build(state, cors)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

// ---------------------------------------------------------------------------
// API: full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_application_lifecycle() {
    let app = app().await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(
            r#"{"company":"Acme","position":"Engineer","status":"Applied","dateApplied":"2024-01-15","notes":"referred"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = parse(&body);
    assert_eq!(
        created,
        json!({
            "id": 1,
            "company": "Acme",
            "position": "Engineer",
            "status": "Applied",
            "dateApplied": "2024-01-15",
            "notes": "referred",
        })
    );

    // List
    let (status, body) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([created]));

    // Delete
    let (status, body) = send(&app, "DELETE", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    // List again
    let (status, body) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));

    // Repeat delete
    let (status, body) = send(&app, "DELETE", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["error"], "Application 1 not found");
}

#[tokio::test]
async fn should_list_every_created_application_with_unique_ids() {
    let app = app().await;
    let mut created = Vec::new();

    for (company, status) in [
        ("Acme", "Applied"),
        ("Globex", "Interview"),
        ("Initech", "Rejected"),
    ] {
        let body = json!({
            "company": company,
            "position": "Engineer",
            "status": status,
            "dateApplied": "2024-03-01",
        })
        .to_string();
        let (code, body) = send(&app, "POST", "/api/applications", Some(&body)).await;
        assert_eq!(code, StatusCode::CREATED);

        let record = parse(&body);
        assert_eq!(record["company"], company);
        assert_eq!(record["status"], status);
        assert!(record["notes"].is_null());
        created.push(record);
    }

    let ids: HashSet<i64> = created.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 3);

    let (_, body) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(parse(&body), Value::Array(created));
}

#[tokio::test]
async fn should_not_create_record_when_required_field_missing() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(r#"{"company":"Acme","position":"Engineer","dateApplied":"2024-01-15"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"], "missing required field `status`");

    let (_, body) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn should_reject_date_not_in_iso_format() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/applications",
        Some(r#"{"company":"Acme","position":"Engineer","status":"Applied","dateApplied":"2024-1-15"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_non_integer_id_on_delete() {
    let app = app().await;
    let (status, body) = send(&app, "DELETE", "/api/applications/first", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"], "invalid application id `first`");
}

#[tokio::test]
async fn should_fetch_single_application_by_id() {
    let app = app().await;
    send(
        &app,
        "POST",
        "/api/applications",
        Some(r#"{"company":"Acme","position":"Engineer","status":"Applied","dateApplied":"2024-01-15"}"#),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["position"], "Engineer");

    let (status, _) = send(&app, "GET", "/api/applications/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_keep_empty_notes_as_given() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(r#"{"company":"Acme","position":"Engineer","status":"Applied","dateApplied":"2024-01-15","notes":""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = parse(&body);
    assert_eq!(created["notes"], "");

    let (_, body) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(parse(&body), json!([created]));
    assert_eq!(parse(&body)[0]["notes"], "");
}
