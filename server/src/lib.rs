use axum::{extract::{Path, Query, State}, http::{HeaderValue, StatusCode}, routing::get, Json, Router};
use docsearch_core::{DocId, Document, IndexStats, SearchEngine, SearchHit, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Upper bound on `k`, whatever the client asks for.
pub const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_TOP_K }

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    /// Documents with a positive score, before the `k` cutoff.
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize, Deserialize)]
pub struct DocSummary {
    pub id: DocId,
    pub title: String,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

/// Origins come from `CORS_ALLOW_ORIGIN` as a comma-separated list. Unset,
/// or with no parseable entry, any origin is allowed.
fn cors_from_env() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|list| list.split(',').filter_map(|o| o.trim().parse().ok()).collect())
        .unwrap_or_default();
    let allow_origin = if origins.is_empty() { AllowOrigin::any() } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

pub fn build_app(engine: Arc<SearchEngine>) -> Router {
    let app_state = AppState { engine };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/docs", get(docs_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors_from_env())
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    if params.q.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "query parameter `q` must not be empty".into()));
    }
    let start = std::time::Instant::now();
    let k = params.k.min(MAX_K);

    let mut results = state.engine.search(&params.q, state.engine.documents().len());
    let total_hits = results.len();
    results.truncate(k);

    let elapsed = start.elapsed();
    tracing::debug!(query = %params.q, total_hits, returned = results.len(), "search served");
    Ok(Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results }))
}

pub async fn docs_handler(State(state): State<AppState>) -> Json<Vec<DocSummary>> {
    let docs = state
        .engine
        .documents()
        .iter()
        .map(|d| DocSummary { id: d.id, title: d.title.clone() })
        .collect();
    Json(docs)
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> Result<Json<Document>, StatusCode> {
    state.engine.document(doc_id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.engine.stats())
}
