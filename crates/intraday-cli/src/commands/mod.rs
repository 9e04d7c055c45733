mod bars;
mod daily;

use std::sync::Arc;

use intraday_core::{
    AlphaVantageClient, DailyAggregate, DailyAggregator, IntradayService, ProviderConfig, RawBar,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Result of one command, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Daily(Vec<DailyAggregate>),
    Bars(Vec<RawBar>),
}

impl Report {
    pub fn len(&self) -> usize {
        match self {
            Self::Daily(rows) => rows.len(),
            Self::Bars(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    let config = provider_config(cli)?;
    tracing::debug!(?config, "provider configured");

    match &cli.command {
        Command::Daily(args) => {
            let aggregator = DailyAggregator::with_lookback_days(args.lookback_days)?;
            daily::run(args, &service(config, aggregator)).await
        }
        Command::Bars(args) => bars::run(args, &service(config, DailyAggregator::default())).await,
    }
}

/// Environment first, then explicit flags.
fn provider_config(cli: &Cli) -> Result<ProviderConfig, CliError> {
    let mut config = ProviderConfig::from_env()?;
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.as_str());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    Ok(config.validate()?)
}

fn service(config: ProviderConfig, aggregator: DailyAggregator) -> IntradayService {
    IntradayService::new(Arc::new(AlphaVantageClient::new(config)), aggregator)
}
