pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product. All fields other than the store-assigned id are
/// optional; nothing validates them on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Absolute filesystem path of the copied upload; unset when the record
    /// has no image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Fields of a product as submitted by a client, before the store has
/// assigned an id.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed product id: {0}")]
    MalformedId(String),
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Document-store operations for products. Implementations must be safe for
/// concurrent use; every handler performs exactly one store call.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product and return it with its store-assigned id.
    async fn insert(&self, draft: ProductDraft, image: String) -> Result<Product, StoreError>;

    /// All products in store-native order. No pagination or filtering.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Look up a product by id. Ok(None) means no such record.
    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Overwrite name/description/price unconditionally; replace the image
    /// only when one is supplied. Ok(None) means no such record.
    async fn update(
        &self,
        id: &str,
        draft: ProductDraft,
        image: Option<String>,
    ) -> Result<Option<Product>, StoreError>;

    /// Find-and-remove in one store operation. Ok(None) means no such record.
    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError>;
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}
