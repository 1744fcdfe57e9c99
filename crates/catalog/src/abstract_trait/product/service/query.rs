use crate::domain::response::product::{ProductListResponse, ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
}
