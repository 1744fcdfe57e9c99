use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Removes the row and returns its pre-delete snapshot.
    async fn delete_product(&self, id: i32) -> Result<ProductModel, RepositoryError>;
}
