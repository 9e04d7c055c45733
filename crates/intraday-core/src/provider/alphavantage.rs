use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::provider::payload::{parse_series, Payload};
use crate::provider::IntradaySource;
use crate::{ProviderConfig, ProviderError, RawBar, Symbol};

/// Alpha Vantage `TIME_SERIES_INTRADAY` client.
///
/// One GET per fetch, full output size at 15-minute granularity. There is no
/// retry and no caching; every failure is returned to the caller classified.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http_client: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl AlphaVantageClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ProviderConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn intraday_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}?function=TIME_SERIES_INTRADAY&symbol={}&interval=15min&outputsize=full&apikey={}",
            self.config.base_url(),
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(self.config.api_key()),
        )
    }

    async fn fetch_bars(&self, symbol: &Symbol) -> Result<Vec<RawBar>, ProviderError> {
        let mut request =
            HttpRequest::get(self.intraday_url(symbol)).with_header("Accept", "application/json");
        if let Some(timeout_ms) = self.config.timeout_ms() {
            request = request.with_timeout_ms(timeout_ms);
        }

        let response = self.http_client.execute(request).await.map_err(|error| {
            ProviderError::Transport {
                message: format!("alphavantage transport error: {}", error.message()),
                status: None,
                timed_out: error.timed_out(),
            }
        })?;

        if !response.is_success() {
            return Err(ProviderError::Transport {
                message: format!("alphavantage returned status {}", response.status),
                status: Some(response.status),
                timed_out: false,
            });
        }

        let series = Payload::classify(&response.body).into_series()?;
        let parsed = parse_series(&series)?;

        if parsed.skipped > 0 {
            tracing::debug!(
                symbol = %symbol,
                skipped = parsed.skipped,
                "dropped series entries with unparseable timestamps"
            );
        }

        Ok(parsed.bars)
    }
}

impl IntradaySource for AlphaVantageClient {
    fn fetch<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawBar>, ProviderError>> + Send + 'a>> {
        Box::pin(self.fetch_bars(symbol))
    }
}
