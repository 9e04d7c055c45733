use thiserror::Error;

/// Validation errors for caller-supplied values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
}

/// Invalid provider or aggregation configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key cannot be empty")]
    EmptyApiKey,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("lookback window must be at least one day")]
    ZeroLookback,
    #[error("environment variable {name} is not a valid number: '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Failure classes of a single intraday fetch.
///
/// Every variant is fatal to the request that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a usage or rate advisory instead of data.
    #[error("provider throttled the request: {message}")]
    Throttled { message: String },

    /// The provider refused the request, typically for an unknown symbol.
    #[error("provider rejected the request: {message}")]
    Rejected { message: String },

    /// The payload did not have the shape of an intraday series.
    #[error("unexpected provider response: {detail}")]
    SchemaMismatch { detail: String },

    /// The request never produced a usable HTTP 2xx body.
    #[error("provider transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
        timed_out: bool,
    },
}

impl ProviderError {
    pub fn schema(detail: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            detail: detail.into(),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Throttled { .. } => "provider.throttled",
            Self::Rejected { .. } => "provider.rejected",
            Self::SchemaMismatch { .. } => "provider.schema_mismatch",
            Self::Transport { .. } => "provider.transport",
        }
    }
}
