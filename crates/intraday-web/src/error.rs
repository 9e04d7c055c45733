use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use intraday_core::{ConfigError, ProviderError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Request failures mapped onto HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Symbol required.")]
    MissingSymbol,

    #[error(transparent)]
    InvalidSymbol(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingSymbol | Self::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
            Self::Provider(ProviderError::Throttled { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Self::Provider(ProviderError::Rejected { .. }) => StatusCode::NOT_FOUND,
            Self::Provider(ProviderError::Transport {
                timed_out: true, ..
            }) => StatusCode::GATEWAY_TIMEOUT,
            Self::Provider(ProviderError::SchemaMismatch { .. })
            | Self::Provider(ProviderError::Transport { .. }) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSymbol => "request.missing_symbol",
            Self::InvalidSymbol(_) => "request.invalid_symbol",
            Self::Provider(error) => error.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, Self::MissingSymbol) {
            return (status, self.to_string()).into_response();
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Startup failures of the server binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
