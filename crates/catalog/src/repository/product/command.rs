use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("📦 Inserting product: {}", req.name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO product (name, category_id, quantity, price, details, created)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP)
            RETURNING id, name, category_id, quantity, price, details, created
            "#,
        )
        .bind(&req.name)
        .bind(req.category_id)
        .bind(req.quantity)
        .bind(req.price)
        .bind(&req.details)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let id = req.id.ok_or(RepositoryError::NotFound)?;

        info!("✏️ Updating product ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // `created` is immutable; the UPDATE never touches it.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE product
            SET name = $2,
                category_id = $3,
                quantity = $4,
                price = $5,
                details = $6
            WHERE id = $1
            RETURNING id, name, category_id, quantity, price, details, created
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.category_id)
        .bind(req.quantity)
        .bind(req.price)
        .bind(&req.details)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }

    async fn delete_product(&self, id: i32) -> Result<ProductModel, RepositoryError> {
        info!("🗑️ Deleting product ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            DELETE FROM product
            WHERE id = $1
            RETURNING id, name, category_id, quantity, price, details, created
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }
}
