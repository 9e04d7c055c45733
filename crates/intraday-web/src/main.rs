use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use intraday_core::{AlphaVantageClient, IntradayService};
use intraday_web::{router, AppState, ServerArgs, ServerError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(ServerArgs::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server stopped");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(args: ServerArgs) -> Result<(), ServerError> {
    let provider = args.provider_config()?;
    let aggregator = args.aggregator()?;
    tracing::info!(
        base_url = provider.base_url(),
        timeout_ms = provider.timeout_ms(),
        lookback_days = aggregator.lookback_days(),
        "provider configured"
    );

    let service = IntradayService::new(Arc::new(AlphaVantageClient::new(provider)), aggregator);
    let app = router(AppState::new(service), args.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(address = %args.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
}
