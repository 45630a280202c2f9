use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{domain::models::Publication, AppState};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_publications))
        .route("/:id", get(get_publication))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicationsQuery {
    domain: Option<String>,
}

#[instrument(name = "GET /api/Publications", skip(app_state))]
async fn get_publications(
    State(app_state): State<AppState>,
    Query(query): Query<PublicationsQuery>,
) -> Result<Json<Vec<Publication>>, ApiError> {
    let publications = app_state
        .catalog
        .list_publications(query.domain.as_deref())
        .await?;
    Ok(Json(publications))
}

#[instrument(name = "GET /api/Publications/:id", skip(app_state))]
async fn get_publication(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Publication>, ApiError> {
    Ok(Json(app_state.catalog.get_publication(id).await?))
}
