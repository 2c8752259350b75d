//! Request context extraction and handling.

use axum::http::{header::HeaderMap, Method, Uri};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

use crate::error::{BlockError, BlockResult, ErrorCode};
use crate::render::{PageLinks, PAGE_QUERY_PARAM};

/// Extracted request context containing all relevant information.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID.
    pub request_id: String,
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Query parameters.
    pub query_params: HashMap<String, String>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request timestamp.
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        query_params: HashMap<String, String>,
    ) -> Self {
        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id,
            method,
            uri,
            query_params,
            headers,
            timestamp: Utc::now(),
        }
    }

    /// Returns the value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|s| s.as_str())
    }

    /// The requested page from the `paged` parameter.
    ///
    /// Missing means page 1 and `0` is passed through for the caller to
    /// clamp; anything that is not a number is rejected.
    pub fn requested_page(&self) -> BlockResult<usize> {
        match self.query_param(PAGE_QUERY_PARAM) {
            None => Ok(1),
            Some(raw) => parse_page(raw).ok_or_else(|| {
                BlockError::with_message(
                    ErrorCode::InvalidQueryParameterValue,
                    format!("Invalid page number '{}'", raw),
                )
            }),
        }
    }

    /// Page links for this request's URL, resolved under the path of
    /// `public_url` so a service mounted below a prefix keeps it.
    pub fn page_links(&self, public_url: &Url) -> BlockResult<PageLinks> {
        let path_and_query = self
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let mut root = public_url.clone();
        root.set_query(None);
        root.set_fragment(None);
        if !root.path().ends_with('/') {
            let dir = format!("{}/", root.path());
            root.set_path(&dir);
        }

        // "./" keeps a segment such as "a:b" from parsing as a scheme.
        let relative = format!("./{}", path_and_query.trim_start_matches('/'));
        let base = root.join(&relative).map_err(|e| {
            BlockError::with_message(
                ErrorCode::InternalError,
                format!("Failed to build page links: {}", e),
            )
        })?;
        Ok(PageLinks::new(base))
    }
}

/// Parses a page number. Empty input counts as page 1.
pub fn parse_page(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(1);
    }
    raw.parse::<usize>().ok()
}
