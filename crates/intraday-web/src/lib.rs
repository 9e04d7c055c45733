//! HTTP surface for the intraday pipeline.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/intraday/:symbol` | JSON array of daily aggregates, most recent first |
//! | `GET /health` | `{"status":"ok"}` |
//!
//! Provider failures map to 429 (throttled), 404 (rejected), 502 (bad payload
//! or upstream status) and 504 (upstream timeout).

pub mod config;
pub mod error;

use std::path::Path as FsPath;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::Request;
use axum::routing::get;
use axum::{Json, Router};
use intraday_core::{DailyAggregate, IntradayService, Symbol};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use crate::config::ServerArgs;
pub use crate::error::{ApiError, ServerError};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: IntradayService,
}

impl AppState {
    pub fn new(service: IntradayService) -> Self {
        Self { service }
    }
}

/// Build the API router, optionally serving a static front-end for other paths.
pub fn router(state: AppState, static_dir: Option<&FsPath>) -> Router {
    let api = Router::new()
        .route("/api/intraday/:symbol", get(daily_aggregates))
        .route("/health", get(health))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(CorsLayer::permissive()).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }),
    )
}

async fn daily_aggregates(
    State(state): State<AppState>,
    Path(raw_symbol): Path<String>,
) -> Result<Json<Vec<DailyAggregate>>, ApiError> {
    if raw_symbol.trim().is_empty() {
        return Err(ApiError::MissingSymbol);
    }
    let symbol = Symbol::parse(&raw_symbol)?;

    let aggregates = state.service.daily(&symbol).await?;
    Ok(Json(aggregates))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
