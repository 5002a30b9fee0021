use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};
use service::inventory::repository::mock::InMemoryServiceRepository;
use service::InventoryService;

fn build_app() -> (Arc<InMemoryServiceRepository>, Router) {
    let repo = Arc::new(InMemoryServiceRepository::new());
    let state = ServerState::new(InventoryService::new(repo.clone()));
    (repo, routes::build_api_router(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

async fn create(app: &Router, hostname: &str, ip: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/services", Some(json!({"hostname": hostname, "ip_address": ip}))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn health_is_ok() {
    let (_, app) = build_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_sell_delete_walkthrough() {
    let (_, app) = build_app();

    let created = create(&app, "a.example.com", "10.0.0.1").await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "Available");
    assert_eq!(created["hostname"], "a.example.com");

    let (status, sold) = send(&app, Method::POST, "/api/services/1/sell", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sold["id"], 1);
    assert_eq!(sold["status"], "Sold");

    let (status, body) = send(&app, Method::DELETE, "/api/services/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, listed) = send(&app, Method::GET, "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn list_is_newest_first_with_formatted_time() {
    let (_, app) = build_app();
    create(&app, "first.example.com", "10.0.0.1").await;
    create(&app, "second.example.com", "10.0.0.2").await;

    let (_, listed) = send(&app, Method::GET, "/api/services", None).await;
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["hostname"], "second.example.com");
    assert_eq!(rows[1]["hostname"], "first.example.com");

    let time = rows[0]["time"].as_str().unwrap();
    assert_eq!(time.len(), "YYYY-MM-DD HH:MM".len());
    assert_eq!(&time[4..5], "-");
    assert_eq!(&time[10..11], " ");
    assert!(rows[0].get("created_at").is_none());
}

#[tokio::test]
async fn missing_or_empty_fields_are_rejected_and_not_stored() {
    let (repo, app) = build_app();
    let bodies = [
        json!({}),
        json!({"hostname": "a.example.com"}),
        json!({"ip_address": "10.0.0.1"}),
        json!({"hostname": "", "ip_address": "10.0.0.1"}),
        json!({"hostname": "a.example.com", "ip_address": "  "}),
        json!({"hostname": null, "ip_address": "10.0.0.1"}),
    ];
    for b in bodies {
        let (status, body) = send(&app, Method::POST, "/api/services", Some(b.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {b}");
        assert_eq!(body, json!({"error": "Hostname and IP Address are required."}));
    }
    assert!(repo.is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (repo, app) = build_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/services")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn sell_twice_stays_sold() {
    let (_, app) = build_app();
    create(&app, "a.example.com", "10.0.0.1").await;
    send(&app, Method::POST, "/api/services/1/sell", None).await;
    let (status, body) = send(&app, Method::POST, "/api/services/1/sell", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Sold");
}

#[tokio::test]
async fn unknown_ids_are_silent_noops() {
    let (repo, app) = build_app();
    create(&app, "a.example.com", "10.0.0.1").await;

    let (status, body) = send(&app, Method::POST, "/api/services/42/sell", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/services/42", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn non_numeric_id_is_a_json_bad_request() {
    let (repo, app) = build_app();
    create(&app, "a.example.com", "10.0.0.1").await;

    for (method, uri) in [(Method::DELETE, "/api/services/abc"), (Method::POST, "/api/services/abc/sell")] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Invalid service id.");
        assert!(body["detail"].as_str().unwrap().contains("abc"));
    }
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn overlong_hostname_names_the_limit() {
    let (repo, app) = build_app();
    let body = json!({"hostname": "h".repeat(300), "ip_address": "10.0.0.1"});
    let (status, body) = send(&app, Method::POST, "/api/services", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Hostname must be at most 255 characters."}));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn store_failure_is_generic_500() {
    let (repo, app) = build_app();
    repo.set_failing(true);

    let (status, body) = send(&app, Method::GET, "/api/services", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch services."}));

    let (status, body) = send(&app, Method::POST, "/api/services", Some(json!({"hostname": "a", "ip_address": "b"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to add service."}));

    let (status, _) = send(&app, Method::POST, "/api/services/1/sell", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, Method::DELETE, "/api/services/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (_, app) = build_app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/services").is_some());
}
