//! Request routing for the block service.

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Method, Response, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::{BlockError, BlockResult, ErrorCode};
use crate::handlers;
use crate::storage::PostStore;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn PostStore>,
    pub public_url: Arc<Url>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn PostStore>) -> Self {
        let public_url = Arc::new(config.public_base_url());
        Self {
            config,
            store,
            public_url,
        }
    }
}

/// Creates the main router for the block service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/posts", post(posts_handler))
        .route("/posts/:id", get(post_handler).delete(post_handler))
        .route("/blocks/latest-posts", get(latest_posts_handler))
        .route("/blocks/faq", post(faq_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    axum::Json(json!({ "status": "ok" }))
}

/// Handler for the post collection.
async fn posts_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, headers, query);
    respond(&ctx, handlers::create_post(&ctx, state.store.clone(), body).await)
}

/// Handler for single posts.
async fn post_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, headers, query);
    let result = match ctx.method.as_str() {
        "GET" => handlers::get_post(&ctx, state.store.clone(), &id).await,
        "DELETE" => handlers::delete_post(&ctx, state.store.clone(), &id).await,
        _ => Err(BlockError::new(ErrorCode::ResourceNotFound)),
    };
    respond(&ctx, result)
}

/// Handler for the server-rendered latest-posts block.
async fn latest_posts_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, headers, query);
    let result =
        handlers::latest_posts_view(&ctx, state.store.clone(), state.public_url.as_ref()).await;
    respond(&ctx, result)
}

/// Handler for the FAQ block.
async fn faq_handler(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, headers, query);
    respond(&ctx, handlers::faq_view(&ctx, body).await)
}

async fn fallback_handler(method: Method, uri: Uri, headers: HeaderMap) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, headers, HashMap::new());
    respond(&ctx, Err(BlockError::new(ErrorCode::ResourceNotFound)))
}

fn respond(ctx: &RequestContext, result: BlockResult<Response<Body>>) -> Response<Body> {
    match result {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(
                request_id = %ctx.request_id,
                method = %ctx.method,
                uri = %ctx.uri,
                code = e.code.as_str(),
                "request failed: {}",
                e.message
            );
            e.with_request_id(&ctx.request_id).into_response()
        }
    }
}
