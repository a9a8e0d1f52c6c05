/// Error types for Community Service
///
/// Store failures never reach this type: services absorb them and substitute
/// fallback data. What remains are request-shape problems and genuine
/// internal faults, converted to HTTP responses for API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Result type for community-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload parsed but broke a field rule
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Payload or query string could not be parsed
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let details = match self {
            // Field name -> list of broken rules
            AppError::Validation(errors) => serde_json::to_value(errors.field_errors()).ok(),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.error_type(),
            message: self.to_string(),
            status: status.as_u16(),
            details,
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::{ValidationError, ValidationErrors};

    #[actix_web::test]
    async fn validation_error_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));
        let err = AppError::from(errors);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["status"], 400);
        assert!(json["details"]["name"].is_array());
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("missing field `name`".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn internal_maps_to_500() {
        let err = AppError::Internal("boom".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
