//! Request handlers for the block service.

mod blocks;
mod posts;

pub use blocks::*;
pub use posts::*;

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::{BlockError, BlockResult, ErrorCode};

/// Creates common response headers.
pub fn common_headers(ctx: &RequestContext) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        headers.insert("x-request-id", value);
    }
    headers.insert("server", HeaderValue::from_static("latest-posts-rs"));
    headers
}

/// Serializes `value` as a JSON response.
pub fn json_response<T: Serialize>(
    ctx: &RequestContext,
    status: StatusCode,
    value: &T,
) -> BlockResult<Response<Body>> {
    let body = serde_json::to_vec(value).map_err(|e| {
        BlockError::with_message(ErrorCode::InternalError, format!("Failed to encode response: {}", e))
    })?;

    let mut headers = common_headers(ctx);
    if let Ok(value) = HeaderValue::from_str(mime::APPLICATION_JSON.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }

    Ok(build_response(status, headers, Body::from(body)))
}

/// Parses a JSON request body.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> BlockResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        BlockError::with_message(ErrorCode::InvalidJsonDocument, format!("Invalid JSON body: {}", e))
    })
}

/// Builds a response with the given status, headers, and body.
pub fn build_response(status: StatusCode, headers: HeaderMap, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
