//! Server configuration.

use clap::Parser;
use url::Url;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default host address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "latest-posts-rs")]
#[command(about = "Latest-posts and FAQ block service")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Public base URL used in pagination links (defaults to the bind address).
    #[arg(long)]
    pub public_url: Option<Url>,

    /// Number of demo posts to create at startup.
    #[arg(long, default_value_t = 0)]
    pub seed_posts: usize,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
            seed_posts: 0,
            debug: false,
            silent: false,
        }
    }
}

/// Server configuration derived from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Public base URL for links; `None` means the bind address.
    pub public_url: Option<Url>,
    /// Demo posts created at startup.
    pub seed_posts: usize,
    /// Enable debug logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
            seed_posts: 0,
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            public_url: args.public_url,
            seed_posts: args.seed_posts,
            debug: args.debug,
        }
    }
}

impl Config {
    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL for pagination links.
    pub fn public_base_url(&self) -> Url {
        self.public_url.clone().unwrap_or_else(|| {
            Url::parse(&format!("http://{}/", self.bind_address()))
                .unwrap_or_else(|_| Url::parse("http://localhost/").expect("static URL"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "latest-posts-rs",
            "--port",
            "9000",
            "--public-url",
            "https://blog.example.com/",
            "--seed-posts",
            "25",
        ]);
        let config = Config::from(args);
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_posts, 25);
        assert_eq!(
            config.public_base_url().as_str(),
            "https://blog.example.com/"
        );
    }

    #[test]
    fn test_public_url_defaults_to_bind_address() {
        let config = Config::default();
        assert_eq!(config.public_base_url().as_str(), "http://127.0.0.1:8080/");
    }
}
