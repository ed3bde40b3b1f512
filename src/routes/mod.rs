use std::sync::Arc;

use axum::{Router, http::StatusCode};

use crate::{response::ApiResponse, state::AppState};

pub mod health;
pub mod public;
pub mod todos;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .nest(
            "/api",
            Router::new()
                .merge(health::router(state.clone()))
                .merge(todos::router(state)),
        )
        .fallback(not_found)
}

async fn not_found() -> ApiResponse<serde_json::Value> {
    ApiResponse::failure(StatusCode::NOT_FOUND, "Resource not found")
}
