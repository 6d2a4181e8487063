use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{parse_id, Product, ProductDraft, ProductStore, StoreError};

/// Postgres-backed product store. One `products` table, created on connect if
/// it does not exist; `created_at` only exists to make list order stable.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
                name text,
                description text,
                price double precision,
                image text,
                created_at timestamptz NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, draft: ProductDraft, image: String) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, image
            "#,
        )
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.price)
        .bind(image)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image FROM products ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(
        &self,
        id: &str,
        draft: ProductDraft,
        image: Option<String>,
    ) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;

        // name/description/price are overwritten with whatever the client
        // sent, missing fields included; image only when a new one exists.
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, image = COALESCE($5, image)
            WHERE id = $1
            RETURNING id, name, description, price, image
            "#,
        )
        .bind(id)
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.price)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;

        let product = sqlx::query_as::<_, Product>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, description, price, image",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
