//! Domain error to HTTP response mapping.
//!
//! One function owns the full taxonomy so no raw collaborator failure can
//! reach a client: operational errors keep their message, non-operational
//! errors (database, internal) are logged with full context and replaced
//! with a generic body.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use bz_core::errors::{DomainError, OtpError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use validator::ValidationErrors;

/// Error body shape shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// HTTP status for each error kind
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Otp(OtpError::DeliveryFailure) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Otp(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        DomainError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert a domain error into the client-facing HTTP response
pub fn to_http_response(request_id: &str, error: &DomainError) -> HttpResponse {
    let status = error_status(error);

    if !error.is_operational() {
        log::error!("[{}] Unhandled error: {:?}", request_id, error);
        return HttpResponse::build(status).json(ErrorBody::new("Internal Server Error"));
    }

    log::warn!("[{}] Request failed: {}", request_id, error);

    let body = match error {
        DomainError::Otp(OtpError::InvalidOrExpired { attempts_remaining }) => {
            ErrorBody::new(error.to_string())
                .with_details(json!({ "attemptsRemaining": attempts_remaining }))
        }
        _ => ErrorBody::new(error.to_string()),
    };

    HttpResponse::build(status).json(body)
}

/// Convert DTO validation failures into a 400 response with field details
pub fn validation_failure(request_id: &str, errors: &ValidationErrors) -> HttpResponse {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    log::warn!("[{}] Request validation failed: {:?}", request_id, fields);

    HttpResponse::BadRequest().json(
        ErrorBody::new("Invalid request data.").with_details(json!({ "fields": fields })),
    )
}
