use axum::extract::{Extension, Multipart, State};
use axum::Json;
use serde_json::{json, Value};

use super::utils::read_product_form;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// POST /products - create a product from a multipart form.
///
/// A file part is required here, unlike update. The upload is copied into the
/// blob store first; if the insert then fails the copy is removed so a failed
/// request leaves nothing behind.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = read_product_form(multipart).await?;

    let Some(file) = form.file else {
        return Err(ApiError::bad_request("No file uploaded"));
    };

    let image = state
        .blobs
        .save(&file.original_name, &file.bytes)
        .await
        .map_err(|e| {
            tracing::error!("failed to store upload {}: {}", file.original_name, e);
            ApiError::internal_server_error("Error saving uploaded file")
        })?;
    let image = image.to_string_lossy().into_owned();

    match state.store.insert(form.draft, image.clone()).await {
        Ok(product) => {
            tracing::info!(id = %product.id, caller = %user.sub, "product created");
            Ok(Json(json!({ "message": "Product saved successfully" })))
        }
        Err(e) => {
            state.blobs.remove(&image).await;
            Err(e.into())
        }
    }
}
