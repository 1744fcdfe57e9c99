use crate::domain::response::category::CategoryListResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<CategoryListResponse>, ServiceError>;
}
