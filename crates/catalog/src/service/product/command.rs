use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("📦 Creating product: {}", req.name);

        let product = self.command.create_product(req).await.map_err(|e| {
            error!("❌ Failed to create product: {e}");
            ServiceError::from(e)
        })?;

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product ID: {:?}", req.id);

        let product = self.command.update_product(req).await?;

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let product = self.command.delete_product(id).await?;

        Ok(ProductResponse::from(product))
    }
}
