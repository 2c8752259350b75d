//! Common test utilities.

#![allow(dead_code)]

use std::sync::Arc;
use tokio::net::TcpListener;

use latest_posts_rs::models::{NewPost, PostModel};
use latest_posts_rs::{MemoryPostStore, PostServerBuilder, PostStore};

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<dyn PostStore>,
}

impl TestServer {
    /// Creates and starts a test server on a random port.
    pub async fn start() -> Self {
        // Find an available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let base_url = format!("http://127.0.0.1:{}", port);
        let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
        let server = PostServerBuilder::new()
            .host("127.0.0.1")
            .port(port)
            .store(store.clone())
            .build();

        // Start server in background
        tokio::spawn(async move {
            server.run().await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self { base_url, store }
    }

    /// Returns the URL for a path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Inserts `count` posts titled `Post 1..=count`, newest last.
    pub async fn seed(&self, count: usize) -> Vec<PostModel> {
        let start = chrono::Utc::now() - chrono::Duration::days(1);
        let mut posts = Vec::with_capacity(count);
        for n in 1..=count {
            let post = NewPost::new(format!("Post {}", n))
                .created_at(start + chrono::Duration::minutes(n as i64));
            posts.push(self.store.insert_post(post).await.unwrap());
        }
        posts
    }
}
