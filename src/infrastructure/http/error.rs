//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// `error` 为面向用户的描述，`message` 为底层原因
    Internal { error: String, message: String },
}

impl ApiError {
    pub fn internal(error: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Internal {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                ErrorResponse::new(msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                ErrorResponse::new(msg)
            }
            ApiError::Internal { error, message } => {
                tracing::error!(status = status.as_u16(), error = %error, message = %message, "Internal server error");
                ErrorResponse::with_message(error, message)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} with ID {} not found", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::EmptyCollection(msg) => ApiError::BadRequest(msg),
            ApplicationError::StoreError(msg) => {
                ApiError::internal("An error occurred while accessing the family store.", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::family::MemberId;

    #[test]
    fn test_application_error_mapping() {
        let not_found: ApiError = ApplicationError::not_found("Member", MemberId::new(9)).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert!(matches!(not_found, ApiError::NotFound(ref msg) if msg == "Member with ID 9 not found"));

        let empty: ApiError = ApplicationError::EmptyCollection("No members found".into()).into();
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        let validation: ApiError = ApplicationError::validation("'age' is required").into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let store: ApiError = ApplicationError::StoreError("exhausted".into()).into();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_omits_empty_message() {
        let body = serde_json::to_value(ErrorResponse::new("No members found")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "No members found" }));

        let body = serde_json::to_value(ErrorResponse::with_message("failed", "cause")).unwrap();
        assert_eq!(body["message"], "cause");
    }
}
