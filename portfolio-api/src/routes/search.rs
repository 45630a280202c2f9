use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{domain::search::SearchRequest, AppState};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search))
        .route("/suggestions", get(suggestions))
}

#[instrument(name = "GET /api/GlobalSearch", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state.search_service.search(request).await?;
    let cache_control = format!("public, max-age={}", app_state.search_cache_max_age);

    Ok(([(header::CACHE_CONTROL, cache_control)], Json(page)))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionsQuery {
    #[serde(default)]
    query: String,
}

#[instrument(name = "GET /api/GlobalSearch/suggestions", skip(app_state))]
async fn suggestions(
    State(app_state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let suggestions = app_state.search_service.suggestions(&query.query).await?;
    Ok(Json(suggestions))
}
