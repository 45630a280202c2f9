use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{domain::models::Product, AppState};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_products))
        .route("/:id", get(get_product))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductsQuery {
    domain: Option<String>,
}

/// The whole list; the Products page filters and paginates it client-side.
#[instrument(name = "GET /api/Products", skip(app_state))]
async fn get_products(
    State(app_state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = app_state
        .catalog
        .list_products(query.domain.as_deref())
        .await?;
    Ok(Json(products))
}

#[instrument(name = "GET /api/Products/:id", skip(app_state))]
async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(app_state.catalog.get_product(id).await?))
}
