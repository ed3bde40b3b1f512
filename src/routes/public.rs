use axum::{Json, Router, routing::get};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Todo API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "todos": "/api/todos"
        }
    }))
}
