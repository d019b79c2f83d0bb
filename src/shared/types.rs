use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by every endpoint.
///
/// `status_code` always mirrors the HTTP status the envelope is sent with.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code: status.as_u16(),
            message: message.into(),
            data,
            details: None,
        }
    }

    /// 200 with a payload
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, Some(data), message)
    }

    /// 201 with the created record
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::success(StatusCode::CREATED, Some(data), message)
    }

    pub fn error(
        status: StatusCode,
        message: impl Into<String>,
        details: Option<String>,
    ) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
            details,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
