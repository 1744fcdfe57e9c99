use crate::model::category::Category as CategoryModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError>;
}
