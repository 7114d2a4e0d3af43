//! Error types for rentreport-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use rentreport_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = format!("[{}] {}", error.code(), error);
        match error {
            CoreError::NoBranch => ApiError::BadRequest { message },
            CoreError::Superseded { .. } => ApiError::Conflict { message },
            CoreError::Store { .. } | CoreError::Export { .. } => ApiError::Internal { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(ApiError::from(CoreError::NoBranch).status(), StatusCode::BAD_REQUEST);
        let superseded = CoreError::Superseded { branch: "B1".to_string() };
        assert_eq!(ApiError::from(superseded).status(), StatusCode::CONFLICT);
        let store = CoreError::Store { message: "offline".to_string() };
        let api: ApiError = store.into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.to_string().contains("STORE_ERROR"));
    }
}
