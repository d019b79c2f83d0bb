use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::constants::{
    MSG_DUPLICATE_STATE, MSG_INVALID_POPULATION_OR_AREA, MSG_INVALID_STATE_REFERENCE,
    MSG_MISSING_STATE_FIELDS,
};
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Missing required field")]
    MissingField,

    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MissingField
            | AppError::DuplicateName(_)
            | AppError::OutOfRange(_)
            | AppError::InvalidReference(_)
            | AppError::Validation(_)
            | AppError::InvalidInput(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, details) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ("Internal Server Error".to_string(), None)
            }
            AppError::MissingField => (MSG_MISSING_STATE_FIELDS.to_string(), None),
            AppError::DuplicateName(ref name) => {
                tracing::debug!("Rejected duplicate name: {}", name);
                (MSG_DUPLICATE_STATE.to_string(), None)
            }
            AppError::OutOfRange(ref reason) => {
                (MSG_INVALID_POPULATION_OR_AREA.to_string(), Some(reason.clone()))
            }
            AppError::InvalidReference(ref reason) => {
                tracing::debug!("Rejected state reference: {}", reason);
                (MSG_INVALID_STATE_REFERENCE.to_string(), None)
            }
            AppError::Validation(ref details) => {
                ("Validation failed".to_string(), Some(details.clone()))
            }
            AppError::InvalidInput(ref msg)
            | AppError::BadRequest(ref msg)
            | AppError::NotFound(ref msg)
            | AppError::Unauthorized(ref msg) => (msg.clone(), None),
        };

        ApiResponse::<()>::error(status, message, details).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Whether a store error is a unique constraint violation (SQLSTATE 23505)
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => {
            db_err.code() == Some(std::borrow::Cow::Borrowed("23505"))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_field_response() {
        let (status, body) = body_json(AppError::MissingField).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], MSG_MISSING_STATE_FIELDS);
    }

    #[tokio::test]
    async fn test_validation_response_carries_details() {
        let (status, body) =
            body_json(AppError::Validation("population: must be positive".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["details"], "population: must be positive");
    }

    #[tokio::test]
    async fn test_database_error_hides_cause() {
        let (status, body) =
            body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "Internal Server Error");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::DuplicateName("Goa".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidReference("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
