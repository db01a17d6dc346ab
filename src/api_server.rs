// Axum API Server Module
//
// Purpose: JSON surface over the ranking engine for selection UIs
// Endpoints: health, selection options, ranked colleges

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;

use anyhow::Context;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::InstitutionData;
use crate::query_engine::{QueryEngine, QueryError};
use crate::selection::{resolve_selection, SelectionOptions};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: QueryEngine,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// Load the dataset named by the config and build the shared state
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading institution dataset...");
        let path = config.data_path.clone();
        let options = config.load_options();
        let data = tokio::task::spawn_blocking(move || InstitutionData::load(&path, &options))
            .await
            .context("Dataset loader task panicked")??;

        Ok(Self::from_data(data, config))
    }

    /// Build state around an already-loaded dataset
    pub fn from_data(data: InstitutionData, config: &AppConfig) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            engine: QueryEngine::new(Arc::new(data)),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Dropdown contents (placeholder first)
        .route("/api/options", get(get_options))

        // Ranked colleges for a field of study
        .route("/api/colleges", get(get_colleges))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "institutions": state.engine.data().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_options() -> impl IntoResponse {
    Json(SelectionOptions::new())
}

/// Query params for the ranking endpoint (labels or raw codes)
#[derive(Debug, Default, serde::Deserialize)]
struct CollegeQuery {
    field: Option<String>,
    state: Option<String>,
    degree: Option<String>,
    limit: Option<usize>,
}

async fn get_colleges(
    State(state): State<AppState>,
    Query(params): Query<CollegeQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let selector = resolve_selection(
        params.field.as_deref().unwrap_or_default(),
        params.state.as_deref(),
        params.degree.as_deref(),
    )
    .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let Some(selector) = selector else {
        // Field selector still on its placeholder
        return Ok(Json(serde_json::json!({
            "heading": null,
            "rows": 0,
            "data": []
        })));
    };

    let cache_key = format!("colleges:{:?}:{:?}", selector, params.limit);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let start = std::time::Instant::now();
    let mut table = state.engine.recommend(&selector).map_err(AppError::from)?;
    if let Some(limit) = params.limit {
        table.truncate(limit);
    }

    let result = serde_json::json!({
        "heading": table.heading,
        "field": table.field,
        "rows": table.len(),
        "data": table.rows,
        "query_time_us": start.elapsed().as_micros(),
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Query(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        tracing::error!("Query failed: {}", err);
        AppError::Query(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Query(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
