use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Server-rendered front-end for the posts API
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "noteblog")]
#[command(version)]
pub struct Config {
    /// Address to serve pages on
    #[arg(long, env = "BLOG_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Base URL of the posts API, without the `/api/posts` suffix
    #[arg(long, env = "BLOG_API_URL", default_value = "http://localhost:8080", value_parser = parse_api_url)]
    pub api_url: String,

    /// Seconds to wait for the posts API before giving up on a request
    #[arg(long, env = "BLOG_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Origins allowed to call this server cross-origin
    #[arg(long = "allow-origin", env = "BLOG_ALLOW_ORIGIN", value_delimiter = ',')]
    pub allowed_origins: Vec<HeaderValue>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cors_layer(&self) -> Option<CorsLayer> {
        if self.allowed_origins.is_empty() {
            return None;
        }

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(self.allowed_origins.iter().cloned()))
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(tower_http::cors::Any),
        )
    }
}

fn parse_api_url(raw: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(raw).map_err(|err| format!("invalid URL {raw:?}: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{raw:?} is not an http(s) URL"));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}
