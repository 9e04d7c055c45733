//! Market-data providers.
//!
//! [`IntradaySource`] is the seam the pipeline depends on; [`AlphaVantageClient`]
//! is the only production implementation.

mod alphavantage;
pub mod payload;

use std::future::Future;
use std::pin::Pin;

use crate::{ProviderError, RawBar, Symbol};

pub use alphavantage::AlphaVantageClient;
pub use payload::{parse_series, ParsedSeries, Payload};

/// Source of raw 15-minute bars for one symbol.
///
/// Implementations issue at most one upstream call per `fetch` and make no
/// ordering promise about the returned bars.
///
/// # Errors
///
/// - [`ProviderError::Throttled`] when the provider answered with a usage advisory
/// - [`ProviderError::Rejected`] when the provider refused the symbol or request
/// - [`ProviderError::SchemaMismatch`] when the payload is not a 15-minute series
/// - [`ProviderError::Transport`] when no 2xx response was received
pub trait IntradaySource: Send + Sync {
    fn fetch<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawBar>, ProviderError>> + Send + 'a>>;
}
