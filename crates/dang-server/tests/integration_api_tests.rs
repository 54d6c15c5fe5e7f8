//! Integration tests for REST API endpoints
//!
//! These tests drive the router end-to-end against memory and file system
//! repositories.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dang_repository::{FileSystemRepository, MemoryRepository};
use dang_sdk::DecisionService;
use dang_server::api::create_router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn memory_app() -> (Arc<MemoryRepository>, Router) {
    let repository = Arc::new(MemoryRepository::new());
    let service = DecisionService::new(repository.clone());
    (repository, create_router(Arc::new(service)))
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn pricing_batch() -> Value {
    json!({
        "decisions": [
            {
                "name": "risk",
                "input_form": [{"key": "age", "type": "Number"}],
                "output_form": [{
                    "key": "score",
                    "type": "Number",
                    "rule": {"type": "Func", "args": ["age"], "rule": "risk_score"}
                }]
            },
            {
                "name": "pricing",
                "input_form": [
                    {"key": "age", "type": "Number"},
                    {"key": "risk", "type": "Number", "value": "Decision.risk.score"}
                ],
                "output_form": [{
                    "key": "age_group",
                    "type": "String",
                    "rule": {
                        "type": "IntervalMap",
                        "args": ["age"],
                        "rule": {"(...18)": "minor", "[18...65)": "adult", "[65...)": "senior"}
                    }
                }]
            }
        ]
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = memory_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_save_decisions_created() {
    let (repository, app) = memory_app();

    let response = app
        .oneshot(post_json("/decisions", pricing_batch().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let decisions = repository.decisions().await;
    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0].name, "risk");

    let pricing = &decisions[1];
    assert_eq!(
        pricing.output("age_group").unwrap().rule.as_str(),
        concat!(
            r#"{"age_group":{{if less_than .age 18}}"minor""#,
            r#"{{else if (and (greater_than_or_equals .age 18) (less_than .age 65))}}"adult""#,
            r#"{{else}}"senior"{{end}}}"#
        )
    );
    assert_eq!(
        pricing.input("risk").unwrap().chain_link.as_ref().unwrap().decision_name,
        "risk"
    );
}

#[tokio::test]
async fn test_compile_failure_is_bad_request() {
    let (repository, app) = memory_app();

    let batch = json!({
        "decisions": [
            {"name": "ok", "input_form": [], "output_form": []},
            {
                "name": "broken",
                "output_form": [{
                    "key": "verdict",
                    "type": "String",
                    "rule": {"type": "ThresholdMap", "args": ["age"], "rule": {">=18": "adult", "<=18": "minor"}}
                }]
            },
            {"name": "never", "input_form": [], "output_form": []}
        ]
    });

    let response = app
        .oneshot(post_json("/decisions", batch.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid threshold map"));

    let names: Vec<String> = repository
        .decisions()
        .await
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["ok"]);
}

#[tokio::test]
async fn test_bad_source_reference_is_bad_request() {
    let (_, app) = memory_app();

    let batch = json!({
        "decisions": [{
            "name": "pricing",
            "input_form": [{"key": "risk", "type": "Number", "value": "Foo.risk.score"}]
        }]
    });

    let response = app
        .oneshot(post_json("/decisions", batch.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "unrecognized source component in 'Foo.risk.score'"
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (_, app) = memory_app();

    let response = app
        .oneshot(post_json("/decisions", "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("JSON"));
}

#[tokio::test]
async fn test_persistence_failure_is_internal_error() {
    let temp_dir = TempDir::new().unwrap();
    let repository = Arc::new(FileSystemRepository::new(temp_dir.path()).unwrap());
    let app = create_router(Arc::new(DecisionService::new(repository)));

    // a name with a path separator cannot be stored
    let batch = json!({"decisions": [{"name": "../escape"}]});

    let response = app
        .oneshot(post_json("/decisions", batch.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_file_system_repository_receives_documents() {
    let temp_dir = TempDir::new().unwrap();
    let repository = Arc::new(FileSystemRepository::new(temp_dir.path()).unwrap());
    let app = create_router(Arc::new(DecisionService::new(repository)));

    let response = app
        .oneshot(post_json("/decisions", pricing_batch().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(temp_dir.path().join("risk.json").exists());
    assert!(temp_dir.path().join("pricing.json").exists());
}
