use axum::extract::{Extension, Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// DELETE /products/:id - find-and-remove in a single store operation. Hard
/// delete; the image file on disk is left alone.
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.store.delete(&id).await? {
        Some(product) => {
            tracing::info!(id = %product.id, caller = %user.sub, "product deleted");
            Ok(Json(json!({ "message": "Product deleted successfully" })))
        }
        None => Err(ApiError::not_found("Product not found")),
    }
}
