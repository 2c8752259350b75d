//! Post handlers.

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::info;

use crate::context::RequestContext;
use crate::error::{BlockError, BlockResult, ErrorCode};
use crate::models::{NewPost, PostId};
use crate::storage::PostStore;

use super::{build_response, common_headers, json_response, parse_json};

/// POST /posts - Create a post.
pub async fn create_post(
    ctx: &RequestContext,
    store: Arc<dyn PostStore>,
    body: Bytes,
) -> BlockResult<Response<Body>> {
    let new_post: NewPost = parse_json(&body)?;
    let post = store.insert_post(new_post).await?;
    info!(id = %post.id, post_type = %post.post_type, "created post");
    json_response(ctx, StatusCode::CREATED, &post)
}

/// GET /posts/:id - Get a post.
pub async fn get_post(
    ctx: &RequestContext,
    store: Arc<dyn PostStore>,
    id: &str,
) -> BlockResult<Response<Body>> {
    let post = store.get_post(parse_post_id(id)?).await?;
    json_response(ctx, StatusCode::OK, &post)
}

/// DELETE /posts/:id - Delete a post.
pub async fn delete_post(
    ctx: &RequestContext,
    store: Arc<dyn PostStore>,
    id: &str,
) -> BlockResult<Response<Body>> {
    let id = parse_post_id(id)?;
    store.delete_post(id).await?;
    info!(id = %id, "deleted post");
    Ok(build_response(
        StatusCode::NO_CONTENT,
        common_headers(ctx),
        Body::empty(),
    ))
}

fn parse_post_id(raw: &str) -> BlockResult<PostId> {
    raw.parse::<u64>()
        .map(PostId)
        .map_err(|_| BlockError::with_message(ErrorCode::InvalidInput, format!("Invalid post id '{}'", raw)))
}
