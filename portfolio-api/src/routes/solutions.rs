use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{domain::models::Solution, AppState};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_solutions))
        .route("/:id", get(get_solution))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolutionsQuery {
    problem_area: Option<String>,
}

#[instrument(name = "GET /api/Solutions", skip(app_state))]
async fn get_solutions(
    State(app_state): State<AppState>,
    Query(query): Query<SolutionsQuery>,
) -> Result<Json<Vec<Solution>>, ApiError> {
    let solutions = app_state
        .catalog
        .list_solutions(query.problem_area.as_deref())
        .await?;
    Ok(Json(solutions))
}

#[instrument(name = "GET /api/Solutions/:id", skip(app_state))]
async fn get_solution(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Solution>, ApiError> {
    Ok(Json(app_state.catalog.get_solution(id).await?))
}
