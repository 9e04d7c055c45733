use intraday_core::{ConfigError, ProviderError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to format date: {0}")]
    Format(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config(_) => 2,
            Self::Provider(ProviderError::Throttled { .. })
            | Self::Provider(ProviderError::Rejected { .. }) => 3,
            Self::Serialization(_) | Self::Format(_) => 4,
            Self::Provider(ProviderError::SchemaMismatch { .. })
            | Self::Provider(ProviderError::Transport { .. }) => 5,
            Self::Io(_) => 10,
        }
    }
}
