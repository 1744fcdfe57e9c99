use crate::{
    abstract_trait::category::{
        repository::DynCategoryQueryRepository, service::CategoryQueryServiceTrait,
    },
    domain::response::category::CategoryListResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<Vec<CategoryListResponse>, ServiceError> {
        let categories = self.query.find_all().await?;

        info!("✅ Retrieved {} categories", categories.len());

        Ok(categories
            .into_iter()
            .map(CategoryListResponse::from)
            .collect())
    }
}
