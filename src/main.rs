use axum::ServiceExt;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod blog;
mod config;
mod markdown;
mod routes;
mod state;
#[cfg(test)]
mod testing;
mod views;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let api = api::PostsApi::new(&config.api_url, config.request_timeout())?;
    tracing::info!("Using posts API at {}", api.base_url());
    let state = std::sync::Arc::new(state::State::new(api));

    let app = routes::app(state, config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Serving pages on {}", listener.local_addr()?);

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
