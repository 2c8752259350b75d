//! latest-posts-rs: latest-posts and FAQ block service.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use latest_posts_rs::{Args, Config, PostServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from(args);
    let server = PostServer::new(config);

    println!(
        r#"
Block service is starting at {}

  GET  {base}/blocks/latest-posts?totalPosts=30&postsPerPage=3&paged=1
  POST {base}/blocks/faq
  POST {base}/posts

Press Ctrl+C to stop the server.
"#,
        server.bind_address(),
        base = server.base_url()
    );

    server.run().await
}
