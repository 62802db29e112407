//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses. The wire
//! contract is a bare `{ "message": ... }` body — no structured error codes
//! are exposed to callers.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

/// Wire shape of every user-facing error.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let message = if matches!(self.code(), ErrorCode::InternalError) {
            // Storage details stay in the logs, not the response.
            error!(detail = %self.message(), "internal error surfaced to client");
            "Internal server error".to_owned()
        } else {
            self.message().to_owned()
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[actix_web::test]
    async fn validation_failures_map_to_400_with_message() {
        let err = DomainError::invalid_request("Invalid payload");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(err.error_response()).await,
            json!({"message": "Invalid payload"})
        );
    }

    #[actix_web::test]
    async fn unknown_ids_map_to_404() {
        let err = DomainError::not_found("no document 42 in pois");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(err.error_response()).await,
            json!({"message": "no document 42 in pois"})
        );
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let err = DomainError::internal("failed to write collection pois: disk full");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(err.error_response()).await,
            json!({"message": "Internal server error"})
        );
    }
}
