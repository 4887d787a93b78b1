//! Handler tests for the query endpoints.
//!
//! The pool here points at a host that does not exist. Requests that parse
//! their filters before touching the store must still succeed; requests that
//! need a connection must surface a 500 with a JSON error body.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use cicd_backend::config::AppConfig;
use cicd_backend::routes::{app_router, AppState};

fn unreachable_store_state() -> AppState {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
        "postgres://nobody@host.invalid/none",
    );
    let pool = Pool::builder(manager)
        .max_size(1)
        .build()
        .expect("build lazy pool");

    AppState {
        pool,
        config: AppConfig {
            database_url: None,
            app_env: "test".to_string(),
            hostname: "test-host".to_string(),
        },
        metrics: PrometheusBuilder::new().build_recorder().handle(),
    }
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = app_router(unreachable_store_state());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn unknown_status_filter_matches_nothing() {
    // Short-circuits before any connection is checked out.
    let (status, json) = get_json("/api/v1/approvals?status=deployed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["approvals"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_environment_filter_matches_nothing() {
    let (status, json) = get_json("/api/v1/deployments?environment=qa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["deployments"], serde_json::json!([]));
}

#[tokio::test]
async fn unreachable_store_surfaces_500_with_json_body() {
    let (status, json) = get_json("/api/v1/approvals").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn health_does_not_depend_on_the_store() {
    let (status, json) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let app = app_router(unreachable_store_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
