use crate::{
    domain::requests::category::CreateCategoryRequest, model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
}
