//! Repositories offered for sale (`/api/Repositories`).

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{domain::models::RepositoryListing, AppState};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_repositories))
        .route("/:id", get(get_repository))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoriesQuery {
    category: Option<String>,
}

#[instrument(name = "GET /api/Repositories", skip(app_state))]
async fn get_repositories(
    State(app_state): State<AppState>,
    Query(query): Query<RepositoriesQuery>,
) -> Result<Json<Vec<RepositoryListing>>, ApiError> {
    let repositories = app_state
        .catalog
        .list_repositories(query.category.as_deref())
        .await?;
    Ok(Json(repositories))
}

#[instrument(name = "GET /api/Repositories/:id", skip(app_state))]
async fn get_repository(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RepositoryListing>, ApiError> {
    Ok(Json(app_state.catalog.get_repository(id).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::repositories::MockCatalogRepository;
    use crate::routes::test_support::{app, get, listing};

    #[tokio::test]
    async fn filters_by_category_and_activity() {
        let repo = MockCatalogRepository::new().with_repositories(vec![
            listing(1, "Invoice engine", "Finance", true),
            listing(2, "Old ledger", "Finance", false),
            listing(3, "Chat widget", "Web", true),
        ]);

        let response = get(app(repo), "/api/Repositories?category=Finance").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.as_array().unwrap().len(), 1);
        assert_eq!(response.body[0]["technicalStack"], json!("Rust"));
    }

    #[tokio::test]
    async fn database_failure_is_a_generic_500() {
        let repo = MockCatalogRepository::new().failing("disk full");
        let response = get(app(repo), "/api/Repositories/1").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["error"], "An unexpected error occurred");
    }
}
