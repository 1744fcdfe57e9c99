mod category;
mod home;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::home::home_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::index,

        category::get_categories,
        category::create_category,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
    ),
    tags(
        (name = "Home", description = "Welcome endpoint"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(home_routes())
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
