mod config;
mod dispatcher;
mod jsonrpc;

use config::Config;
use dispatcher::Dispatcher;
use quotewire_market_data::AlphaVantageProvider;
use tokio::io::BufReader;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing();

    let provider = AlphaVantageProvider::new(config.api_key, config.base_url);
    let dispatcher = Dispatcher::new(provider);

    tracing::info!("Server started. Waiting for JSON-RPC requests on stdin");
    dispatcher::serve(
        &dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    tracing::info!("Server stopped (stdin closed)");
    Ok(())
}

/// Diagnostics go to stderr; stdout carries only protocol lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
