use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::response::ApiResponse;

/// Top-level fault boundary: any panic escaping a handler becomes a generic
/// 500 envelope. Specific error translations run first; this only catches
/// what nothing else did.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_json)
}

fn panic_to_json(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    tracing::error!("handler panicked: {details}");

    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        .into_response()
}
