use crate::{
    abstract_trait::category::{
        repository::DynCategoryCommandRepository, service::CategoryCommandServiceTrait,
    },
    domain::{requests::category::CreateCategoryRequest, response::category::CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        info!("📁 Creating category: {}", req.name);

        let category = self.command.create_category(req).await.map_err(|e| {
            error!("❌ Failed to create category: {e}");
            ServiceError::from(e)
        })?;

        Ok(CategoryResponse::from(category))
    }
}
