use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::store::Product;
use crate::AppState;

/// GET /products/:id - fetch a single product. No auth. A malformed id
/// surfaces as a store failure (500), not a 400.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    match state.store.find(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::not_found("Product not found")),
    }
}
