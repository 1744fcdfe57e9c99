use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::{ProductListResponse, ProductResponse},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductListResponse>, ServiceError> {
        let products = self.query.find_all().await?;

        info!("✅ Retrieved {} products", products.len());

        Ok(products.into_iter().map(ProductListResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ProductResponse::from(product))
    }
}
