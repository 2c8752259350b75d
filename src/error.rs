//! Block error types and JSON error response formatting.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use hyper::ext::ReasonPhrase;
use serde_json::json;
use thiserror::Error;

/// Error codes surfaced by the block service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InternalError,
    InvalidConfiguration,
    InvalidInput,
    InvalidJsonDocument,
    InvalidQueryParameterValue,
    OutOfRangeInput,
    PostNotFound,
    ResourceNotFound,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InternalError => "InternalError",
            ErrorCode::InvalidConfiguration => "InvalidConfiguration",
            ErrorCode::InvalidInput => "InvalidInput",
            ErrorCode::InvalidJsonDocument => "InvalidJsonDocument",
            ErrorCode::InvalidQueryParameterValue => "InvalidQueryParameterValue",
            ErrorCode::OutOfRangeInput => "OutOfRangeInput",
            ErrorCode::PostNotFound => "PostNotFound",
            ErrorCode::ResourceNotFound => "ResourceNotFound",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidConfiguration
            | ErrorCode::InvalidInput
            | ErrorCode::InvalidJsonDocument
            | ErrorCode::InvalidQueryParameterValue
            | ErrorCode::OutOfRangeInput => StatusCode::BAD_REQUEST,

            ErrorCode::PostNotFound | ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,

            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InternalError => {
                "The server encountered an internal error. Please retry the request."
            }
            ErrorCode::InvalidConfiguration => "The block configuration is invalid.",
            ErrorCode::InvalidJsonDocument => "The JSON request body is invalid.",
            ErrorCode::InvalidQueryParameterValue => {
                "One of the query parameters has an invalid value."
            }
            ErrorCode::OutOfRangeInput => "The requested page is out of range.",
            ErrorCode::PostNotFound => "The specified post does not exist.",
            ErrorCode::ResourceNotFound => "The specified resource does not exist.",
            _ => "An error occurred while processing the request.",
        }
    }
}

/// Block error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct BlockError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl BlockError {
    /// Creates a new block error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
            request_id: None,
        }
    }

    /// Creates a new block error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Shorthand for a configuration error naming the offending attribute.
    pub fn invalid_config(attribute: &str, detail: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::InvalidConfiguration,
            format!("Invalid value for '{}': {}", attribute, detail),
        )
    }

    /// Sets the request ID for this error.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Converts the error to a JSON error body.
    pub fn to_json(&self, request_id: &str) -> serde_json::Value {
        json!({
            "code": self.code.as_str(),
            "message": self.message,
            "requestId": request_id,
            "time": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        })
    }
}

impl IntoResponse for BlockError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let request_id = self
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let body = self.to_json(&request_id).to_string();

        let mut response = (
            status,
            [
                (header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref().to_string()),
                (header::HeaderName::from_static("x-request-id"), request_id),
                (
                    header::HeaderName::from_static("x-error-code"),
                    self.code.as_str().to_string(),
                ),
            ],
            body,
        )
            .into_response();

        // Carry the message in the HTTP/1.1 status line as well.
        if let Ok(reason) = ReasonPhrase::try_from(self.message.as_bytes()) {
            response.extensions_mut().insert(reason);
        }

        response
    }
}

/// Result type alias for block operations.
pub type BlockResult<T> = Result<T, BlockError>;
