// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;

use arbiter_storage::StorageError;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// 200 with the standard envelope
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, ResponseJson(ApiResponse::success(data))).into_response()
}

/// Error envelope with an explicit status and message
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        ResponseJson(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}

/// Convert storage errors to HTTP responses. `not_found_message` replaces
/// the generic text when the handler knows what was being looked up.
pub fn storage_error_response(err: StorageError, not_found_message: &str) -> Response {
    match err {
        StorageError::NotFound => error_response(StatusCode::NOT_FOUND, not_found_message),
        StorageError::InvalidInput(message) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        other => {
            tracing::error!("Storage error: {}", other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
