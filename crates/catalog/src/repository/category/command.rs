use crate::{
    abstract_trait::category::repository::CategoryCommandRepositoryTrait,
    domain::requests::category::CreateCategoryRequest,
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        info!("📁 Inserting category: {}", req.name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO category (name, details, created)
            VALUES ($1, $2, CURRENT_TIMESTAMP)
            RETURNING id, name, details, created
            "#,
        )
        .bind(&req.name)
        .bind(&req.details)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert category: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}
