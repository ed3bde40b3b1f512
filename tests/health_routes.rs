use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
    middleware,
};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use tower::ServiceExt;

use todo_api::{
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
    test_helpers::{mock_state, test_state},
};

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router(state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}

async fn health_response(state: Arc<AppState>) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be json");
    (status, json)
}

#[tokio::test]
async fn health_reports_healthy_when_store_answers() {
    let state = test_state().await;

    let (status, body) = health_response(state).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn health_reports_unhealthy_when_store_is_down() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_string())])
        .into_connection();
    let state = mock_state(db);

    let (status, body) = health_response(state).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
    assert_eq!(body["error"], "Database connection failed");
}
