use std::sync::Arc;

use time::OffsetDateTime;

use crate::provider::{AlphaVantageClient, IntradaySource};
use crate::{DailyAggregate, DailyAggregator, ProviderConfig, ProviderError, RawBar, Symbol};

/// Fetch-then-aggregate pipeline for one symbol per call.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct IntradayService {
    source: Arc<dyn IntradaySource>,
    aggregator: DailyAggregator,
}

impl IntradayService {
    pub fn new(source: Arc<dyn IntradaySource>, aggregator: DailyAggregator) -> Self {
        Self { source, aggregator }
    }

    /// Service backed by the reqwest transport and the default 30-day window.
    pub fn alphavantage(config: ProviderConfig) -> Self {
        Self::new(
            Arc::new(AlphaVantageClient::new(config)),
            DailyAggregator::default(),
        )
    }

    pub fn aggregator(&self) -> DailyAggregator {
        self.aggregator
    }

    /// Daily aggregates with the window ending at the current UTC date.
    pub async fn daily(&self, symbol: &Symbol) -> Result<Vec<DailyAggregate>, ProviderError> {
        self.daily_at(symbol, OffsetDateTime::now_utc()).await
    }

    /// Daily aggregates with the window ending at the date of `now`.
    pub async fn daily_at(
        &self,
        symbol: &Symbol,
        now: OffsetDateTime,
    ) -> Result<Vec<DailyAggregate>, ProviderError> {
        let bars = self.fetch(symbol).await?;
        let aggregates = self.aggregator.aggregate(&bars, now);

        tracing::info!(
            symbol = %symbol,
            bars = bars.len(),
            days = aggregates.len(),
            lookback_days = self.aggregator.lookback_days(),
            "aggregated intraday bars"
        );

        Ok(aggregates)
    }

    /// Raw bars, newest first.
    pub async fn bars(&self, symbol: &Symbol) -> Result<Vec<RawBar>, ProviderError> {
        let mut bars = self.fetch(symbol).await?;
        bars.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(bars)
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<Vec<RawBar>, ProviderError> {
        tracing::debug!(symbol = %symbol, "fetching intraday series");

        match self.source.fetch(symbol).await {
            Ok(bars) => {
                tracing::debug!(symbol = %symbol, bars = bars.len(), "intraday series fetched");
                Ok(bars)
            }
            Err(error) => {
                tracing::warn!(
                    symbol = %symbol,
                    code = error.code(),
                    error = %error,
                    "intraday fetch failed"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use time::macros::datetime;

    use super::*;

    struct StaticSource(Result<Vec<RawBar>, ProviderError>);

    impl IntradaySource for StaticSource {
        fn fetch<'a>(
            &'a self,
            _symbol: &'a Symbol,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<RawBar>, ProviderError>> + Send + 'a>>
        {
            let outcome = self.0.clone();
            Box::pin(async move { outcome })
        }
    }

    fn service(outcome: Result<Vec<RawBar>, ProviderError>) -> IntradayService {
        IntradayService::new(Arc::new(StaticSource(outcome)), DailyAggregator::default())
    }

    #[tokio::test]
    async fn bars_are_returned_newest_first() {
        let service = service(Ok(vec![
            RawBar::new(datetime!(2024-01-01 09:30), 1.0, 1.0, 1),
            RawBar::new(datetime!(2024-01-02 09:30), 1.0, 1.0, 1),
            RawBar::new(datetime!(2024-01-01 15:45), 1.0, 1.0, 1),
        ]));
        let symbol = Symbol::parse("IBM").expect("valid");

        let stamps = service
            .bars(&symbol)
            .await
            .expect("bars")
            .into_iter()
            .map(|bar| bar.timestamp)
            .collect::<Vec<_>>();
        assert_eq!(
            stamps,
            vec![
                datetime!(2024-01-02 09:30),
                datetime!(2024-01-01 15:45),
                datetime!(2024-01-01 09:30),
            ]
        );
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        let rejected = ProviderError::Rejected {
            message: String::from("Invalid API call."),
        };
        let service = service(Err(rejected.clone()));
        let symbol = Symbol::parse("NOPE").expect("valid");

        let err = service
            .daily_at(&symbol, datetime!(2024-01-02 00:00 UTC))
            .await
            .expect_err("must fail");
        assert_eq!(err, rejected);
    }
}
