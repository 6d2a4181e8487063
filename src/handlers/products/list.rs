use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::store::Product;
use crate::AppState;

/// GET /products - all products in store order. No auth, no pagination.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await?;
    Ok(Json(products))
}
