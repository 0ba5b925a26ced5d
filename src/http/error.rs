//! HTTP error normalization
//!
//! Every outward-facing failure — validation, store, or unexpected — is
//! rendered through one shape: `{status, message, detail}`. The response
//! status code mirrors the `status` field; a failure with no usable status
//! defaults to 500.

use crate::domain::{BandstandError, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// The normalized error returned to HTTP callers
#[derive(Debug, Clone, Serialize)]
pub struct HttpError {
    /// HTTP status code, also used as the response status
    pub status: u16,

    /// Human-readable message
    pub message: String,

    /// Arbitrary context, omitted from the body when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl HttpError {
    /// Creates a normalized error; a missing or zero status becomes 500
    pub fn new(status: impl Into<Option<u16>>, message: impl Into<String>) -> Self {
        let status = status.into().filter(|s| *s != 0).unwrap_or(500);
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Client-input error (400)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// Attaches context to the error body
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

// Store failures propagate their upstream status and message verbatim.
impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        Self::new(err.status, err.message)
    }
}

impl From<BandstandError> for HttpError {
    fn from(err: BandstandError) -> Self {
        match err {
            BandstandError::Store(store) => store.into(),
            BandstandError::Validation(message) => Self::new(400, message),
            other => Self::new(500, other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_status_defaults_to_500() {
        assert_eq!(HttpError::new(None, "boom").status, 500);
        assert_eq!(HttpError::new(0, "boom").status, 500);
    }

    #[test]
    fn test_explicit_status_preserved() {
        assert_eq!(HttpError::new(404, "missing").status, 404);
    }

    #[test]
    fn test_store_error_propagates_verbatim() {
        let err: HttpError = StoreError::new(409, "Document update conflict.").into();
        assert_eq!(err.status, 409);
        assert_eq!(err.message, "Document update conflict.");
    }

    #[test]
    fn test_store_error_without_status_defaults() {
        let err: HttpError = StoreError::unavailable("connection refused").into();
        assert_eq!(err.status, 500);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let err: HttpError = BandstandError::Validation("bad".to_string()).into();
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "bad");
    }

    #[test]
    fn test_body_omits_absent_detail() {
        let body = serde_json::to_value(HttpError::bad_request("nope")).unwrap();
        assert_eq!(body, json!({"status": 400, "message": "nope"}));
    }

    #[test]
    fn test_body_includes_detail_when_set() {
        let err = HttpError::bad_request("nope").with_detail(json!({"field": "name"}));
        let body = serde_json::to_value(err).unwrap();
        assert_eq!(body["detail"], json!({"field": "name"}));
    }

    #[test]
    fn test_into_response_status() {
        let response = HttpError::new(404, "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
