use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::ApiError;
use crate::store::ProductDraft;

/// A file part lifted out of the multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    pub bytes: Bytes,
}

/// The multipart form shared by create and update: three text fields plus an
/// optional file part. Absent fields stay `None`; nothing is validated.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub draft: ProductDraft,
    pub file: Option<UploadedFile>,
}

pub async fn read_product_form(mut multipart: Multipart) -> Result<ProductForm, ApiError> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Invalid multipart form data"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => form.draft.name = Some(read_text(field).await?),
            "description" => form.draft.description = Some(read_text(field).await?),
            "price" => {
                // Unparseable prices are dropped, not rejected
                form.draft.price = read_text(field).await?.parse().ok();
            }
            "file" => {
                let original_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("Invalid multipart form data"))?;
                form.file = Some(UploadedFile {
                    original_name,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::bad_request("Invalid multipart form data"))
}
