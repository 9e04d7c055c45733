//! Server command-line arguments.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use intraday_core::{ConfigError, DailyAggregator, ProviderConfig, DEFAULT_LOOKBACK_DAYS};

/// Serve daily aggregates of Alpha Vantage intraday bars over HTTP.
///
/// Provider settings default to the `ALPHAVANTAGE_*` environment variables;
/// flags given here take precedence.
#[derive(Debug, Parser)]
#[command(name = "intraday-web", version, about)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "INTRADAY_BIND", default_value = "127.0.0.1:5080")]
    pub bind: SocketAddr,

    /// Alpha Vantage API key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Provider query endpoint.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Provider request timeout in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Number of calendar days before today kept in the response.
    #[arg(long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
    pub lookback_days: u16,

    /// Directory with the chart front-end build, served for unmatched paths.
    #[arg(long, env = "INTRADAY_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServerArgs {
    pub fn provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        let mut config = ProviderConfig::from_env()?;
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout_ms(timeout_ms);
        }
        config.validate()
    }

    pub fn aggregator(&self) -> Result<DailyAggregator, ConfigError> {
        DailyAggregator::with_lookback_days(self.lookback_days)
    }
}
