//! # Intraday Core
//!
//! Fetches 15-minute bars for a symbol from Alpha Vantage and reduces them to
//! daily summaries over a trailing window.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Window filter and per-day averages/volume |
//! | [`config`] | Provider configuration from the environment |
//! | [`domain`] | Symbol, raw bar and daily aggregate types |
//! | [`error`] | Validation, configuration and provider errors |
//! | [`http_client`] | HTTP transport seam (reqwest or fixture) |
//! | [`provider`] | Provider trait, Alpha Vantage client and payload parsing |
//! | [`service`] | Fetch-then-aggregate pipeline |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intraday_core::{IntradayService, ProviderConfig, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = IntradayService::alphavantage(ProviderConfig::from_env()?);
//!     let symbol = Symbol::parse("IBM")?;
//!
//!     for day in service.daily(&symbol).await? {
//!         println!("{} low={} high={} vol={}", day.day, day.low_average, day.high_average, day.volume);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Symbol ──▶ AlphaVantageClient ──▶ Vec<RawBar> ──▶ DailyAggregator ──▶ Vec<DailyAggregate>
//!                 │
//!                 ▼
//!            HttpClient (reqwest / fixture)
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use intraday_core::ProviderError;
//!
//! fn describe(error: &ProviderError) -> &'static str {
//!     match error {
//!         ProviderError::Throttled { .. } => "try again later",
//!         ProviderError::Rejected { .. } => "unknown symbol",
//!         ProviderError::SchemaMismatch { .. } | ProviderError::Transport { .. } => "upstream failure",
//!     }
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod provider;
pub mod service;

pub use aggregate::{aggregate, DailyAggregator, DEFAULT_LOOKBACK_DAYS};
pub use config::ProviderConfig;
pub use domain::{DailyAggregate, RawBar, Symbol};
pub use error::{ConfigError, ProviderError, ValidationError};
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use provider::{AlphaVantageClient, IntradaySource};
pub use service::IntradayService;
