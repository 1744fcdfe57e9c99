use crate::{
    abstract_trait::{
        category::service::{DynCategoryCommandService, DynCategoryQueryService},
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{
        category::{CategoryCommandRepository, CategoryQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        category::{CategoryCommandService, CategoryQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_query: DynCategoryQueryService,
    pub category_command: DynCategoryCommandService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_query", &"CategoryQueryService")
            .field("category_command", &"CategoryCommandService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let category_query_repo = Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command_repo = Arc::new(CategoryCommandRepository::new(pool.clone()));
        let product_query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(pool));

        let category_query: DynCategoryQueryService =
            Arc::new(CategoryQueryService::new(category_query_repo));
        let category_command: DynCategoryCommandService =
            Arc::new(CategoryCommandService::new(category_command_repo));
        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo));

        Self {
            category_query,
            category_command,
            product_query,
            product_command,
        }
    }
}
