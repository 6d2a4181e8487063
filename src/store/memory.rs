use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{parse_id, Product, ProductDraft, ProductStore, StoreError};

/// In-process product store. Keeps records in insertion order, which is the
/// "store-native" order the list endpoint exposes. Used by the integration
/// tests and for running the server without Postgres.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert(&self, draft: ProductDraft, image: String) -> Result<Product, StoreError> {
        let product = Product {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: Some(image),
        };

        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        draft: ProductDraft,
        image: Option<String>,
    ) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        if let Some(image) = image {
            product.image = Some(image);
        }

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;

        let Some(pos) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        Ok(Some(products.remove(pos)))
    }
}
