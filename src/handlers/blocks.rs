//! Block handlers.

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use bytes::Bytes;
use std::sync::Arc;
use url::Url;

use crate::blocks::{FaqAttributes, LatestPostsAttributes};
use crate::context::RequestContext;
use crate::error::BlockResult;
use crate::render::build_latest_posts_view;
use crate::storage::PostStore;

use super::{json_response, parse_json};

/// GET /blocks/latest-posts - Server-side latest-posts view.
///
/// Block attributes come from the query string; `paged` selects the page.
pub async fn latest_posts_view(
    ctx: &RequestContext,
    store: Arc<dyn PostStore>,
    public_url: &Url,
) -> BlockResult<Response<Body>> {
    let config = LatestPostsAttributes::from_query(&ctx.query_params)?.validate()?;
    let page = ctx.requested_page()?;
    let links = ctx.page_links(public_url)?;

    let view = build_latest_posts_view(store.as_ref(), &config, page, &links).await?;
    json_response(ctx, StatusCode::OK, &view)
}

/// POST /blocks/faq - Validate FAQ attributes into a renderable config.
pub async fn faq_view(ctx: &RequestContext, body: Bytes) -> BlockResult<Response<Body>> {
    let attributes: FaqAttributes = if body.is_empty() {
        FaqAttributes::default()
    } else {
        parse_json(&body)?
    };
    let config = attributes.validate()?;
    json_response(ctx, StatusCode::OK, &config)
}
