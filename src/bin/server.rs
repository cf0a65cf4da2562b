use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_genie::config::AppConfig;
use recipe_genie::orchestrator::Orchestrator;
use recipe_genie::server::router;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP front end for the recipe generation pipeline")]
struct Args {
    /// The address and port to bind to
    #[arg(long, default_value = "0.0.0.0:8000")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env();
    if !config.has_credentials() {
        tracing::warn!("no provider credentials configured, responses will be mocked");
    }

    let orchestrator = Arc::new(Orchestrator::from_config(&config));
    let app = router(orchestrator);

    let listener = tokio::net::TcpListener::bind(&args.address)
        .await
        .with_context(|| format!("Failed to bind to {}", args.address))?;
    tracing::info!(address = %args.address, "listening");
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
