use crate::{
    abstract_trait::category::repository::CategoryQueryRepositoryTrait,
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        info!("🔍 Fetching all categories");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let categories = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, details, created
            FROM category
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(categories)
    }
}
