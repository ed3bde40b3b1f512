use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// The uniform `{success, data?, error?, message?, count?}` envelope shared by
/// every `/api/todos` response. The status code travels alongside the body and
/// is never serialized into it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(status: StatusCode) -> Self {
        Self {
            status,
            success: true,
            data: None,
            error: None,
            message: None,
            count: None,
        }
    }

    pub fn ok(data: T) -> ApiResult<T> {
        let mut response = Self::success(StatusCode::OK);
        response.data = Some(data);
        Ok(response)
    }

    pub fn created(data: T, message: impl Into<String>) -> ApiResult<T> {
        let mut response = Self::success(StatusCode::CREATED);
        response.data = Some(data);
        response.message = Some(message.into());
        Ok(response)
    }

    pub fn with_message(data: T, message: impl Into<String>) -> ApiResult<T> {
        let mut response = Self::success(StatusCode::OK);
        response.data = Some(data);
        response.message = Some(message.into());
        Ok(response)
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> ApiResult<Vec<T>> {
        let mut response = Self::success(StatusCode::OK);
        response.count = Some(items.len());
        response.data = Some(items);
        Ok(response)
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn message_only(message: impl Into<String>) -> ApiResult<serde_json::Value> {
        let mut response = Self::success(StatusCode::OK);
        response.message = Some(message.into());
        Ok(response)
    }

    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            count: None,
        }
    }

    pub(crate) fn from_error(err: &AppError) -> Self {
        Self::failure(err.status(), err.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!("request failed: {}", self.message());
        }
        ApiResponse::from_error(&self).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::ApiResponse;
    use crate::error::AppError;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let response = ApiResponse::ok(42).expect("build response");
        let body = serde_json::to_value(&response).expect("serialize envelope");
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 42);
        assert!(body.get("error").is_none());
        assert!(body.get("message").is_none());
        assert!(body.get("count").is_none());
    }

    #[test]
    fn list_envelope_carries_count() {
        let response = ApiResponse::list(vec!["a", "b"]).expect("build response");
        let body = serde_json::to_value(&response).expect("serialize envelope");
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn failure_envelope_carries_error_only() {
        let response = ApiResponse::from_error(&AppError::not_found("Todo not found"));
        let body = serde_json::to_value(&response).expect("serialize envelope");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Todo not found");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn failure_keeps_requested_status() {
        let response =
            ApiResponse::failure(StatusCode::NOT_FOUND, "Resource not found");
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
