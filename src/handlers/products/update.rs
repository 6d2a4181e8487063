use axum::extract::{Extension, Multipart, Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::utils::read_product_form;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// PUT /products/:id - overwrite a product from a multipart form.
///
/// name/description/price are replaced with whatever the form carried,
/// missing fields included; the image is only replaced when a new file is
/// part of the request. The existence check runs before any file is written
/// so a 404 has no side effects.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = read_product_form(multipart).await?;

    if state.store.find(&id).await?.is_none() {
        return Err(ApiError::not_found("Product not found"));
    }

    let image = match form.file {
        Some(file) => {
            let path = state
                .blobs
                .save(&file.original_name, &file.bytes)
                .await
                .map_err(|e| {
                    tracing::error!("failed to store upload {}: {}", file.original_name, e);
                    ApiError::internal_server_error("Error saving uploaded file")
                })?;
            Some(path.to_string_lossy().into_owned())
        }
        None => None,
    };

    match state.store.update(&id, form.draft, image).await? {
        Some(product) => {
            tracing::info!(id = %product.id, caller = %user.sub, "product updated");
            Ok(Json(json!({ "message": "Product updated successfully" })))
        }
        // Deleted between the existence check and the update
        None => Err(ApiError::not_found("Product not found")),
    }
}
