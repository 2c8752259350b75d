//! HTTP server for the block service.

use chrono::{Duration, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::BlockResult;
use crate::models::NewPost;
use crate::router::{create_router, AppState};
use crate::storage::{MemoryPostStore, PostStore};

/// Block service server.
pub struct PostServer {
    config: Arc<Config>,
    store: Arc<dyn PostStore>,
}

impl PostServer {
    /// Creates a new server with in-memory storage.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemoryPostStore::new()),
        }
    }

    /// Creates a new server with custom storage.
    pub fn with_store(config: Config, store: Arc<dyn PostStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Builds the router with middleware attached.
    pub fn app(&self) -> axum::Router {
        let state = AppState::new(self.config.clone(), self.store.clone());

        create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                        .expose_headers(Any),
                ),
        )
    }

    /// Runs the server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;

        if self.config.seed_posts > 0 {
            seed_demo_posts(self.store.as_ref(), self.config.seed_posts).await?;
            info!("Seeded {} demo posts", self.config.seed_posts);
        }

        let app = self.app();

        info!("Block service is starting at http://{}", addr);
        info!("Pagination links use {}", self.config.public_base_url());

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL for the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

/// Inserts `count` published posts, one hour apart, newest last.
pub async fn seed_demo_posts(store: &dyn PostStore, count: usize) -> BlockResult<()> {
    let start = Utc::now() - Duration::hours(count as i64);
    for n in 1..=count {
        let post = NewPost::new(format!("Demo post {}", n))
            .content(format!(
                "<p>This is demo post number {}. It exists so the pagination has something to page through.</p>",
                n
            ))
            .created_at(start + Duration::hours(n as i64));
        store.insert_post(post).await?;
    }
    Ok(())
}

/// Builder for creating a server.
pub struct PostServerBuilder {
    config: Config,
    store: Option<Arc<dyn PostStore>>,
}

impl PostServerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: None,
        }
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the post store.
    pub fn store(mut self, store: Arc<dyn PostStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the server.
    pub fn build(self) -> PostServer {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryPostStore::new()));

        PostServer::with_store(self.config, store)
    }
}

impl Default for PostServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
