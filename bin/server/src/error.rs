//! HTTP error mapping for the API.
//!
//! Handlers return [`ApiError`]; every variant renders as the
//! `{ "message": ... }` envelope the web client expects on non-2xx
//! responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use smartstay_account::AccountError;
use smartstay_booking::BookingError;
use smartstay_catalog::CatalogError;
use std::fmt;

/// An API failure with its status and client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request is missing or malformed input.
    BadRequest { message: String },
    /// The caller is not (or no longer) authenticated.
    Unauthorized { message: String },
    /// The addressed resource does not exist.
    NotFound { message: String },
    /// Something failed on our side. The underlying cause is logged,
    /// never sent to the client.
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match &err {
            AccountError::EmailTaken { .. } => Self::bad_request("Email already registered"),
            AccountError::InvalidCredentials => Self::unauthorized("Invalid credentials"),
            AccountError::InvalidToken { .. } | AccountError::TokenExpired => {
                Self::unauthorized("Invalid or expired token")
            }
            AccountError::UserNotFound { .. } => Self::not_found("User not found"),
            AccountError::BadPasswordHash { .. } | AccountError::StorageFailed { .. } => {
                tracing::error!(error = %err, "account operation failed");
                Self::internal("Server error")
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::HotelNotFound { .. } => Self::not_found("Hotel not found"),
            CatalogError::StorageFailed { .. } => {
                tracing::error!(error = %err, "catalog operation failed");
                Self::internal("Server error")
            }
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match &err {
            BookingError::StorageFailed { .. } => {
                tracing::error!(error = %err, "booking operation failed");
                Self::internal("Server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn renders_message_envelope() {
        let response = ApiError::not_found("Hotel not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Hotel not found");
    }

    #[tokio::test]
    async fn internal_hides_the_cause() {
        let api: ApiError = AccountError::StorageFailed {
            reason: "connection refused".to_string(),
        }
        .into();
        let response = api.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Server error");
    }

    #[test]
    fn account_errors_map_to_statuses() {
        let taken: ApiError = AccountError::EmailTaken {
            email: "alex@example.com".to_string(),
        }
        .into();
        assert_eq!(taken, ApiError::bad_request("Email already registered"));

        let creds: ApiError = AccountError::InvalidCredentials.into();
        assert_eq!(creds, ApiError::unauthorized("Invalid credentials"));

        let expired: ApiError = AccountError::TokenExpired.into();
        assert_eq!(expired, ApiError::unauthorized("Invalid or expired token"));
    }

    #[test]
    fn missing_hotel_maps_to_not_found() {
        let missing: ApiError = CatalogError::HotelNotFound {
            id: "h9".to_string(),
        }
        .into();
        assert_eq!(missing, ApiError::not_found("Hotel not found"));
    }
}
