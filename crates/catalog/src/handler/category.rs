use crate::{
    abstract_trait::category::service::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::category::CreateCategoryRequest,
        response::category::{CategoryListResponse, CategoryResponse},
    },
    middleware::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Category",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryListResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let categories = service.find_all().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Category name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    ValidatedJson(body): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.create_category(&body).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/categories", get(get_categories))
        .route("/categories", post(create_category))
        .layer(Extension(app_state.di_container.category_query.clone()))
        .layer(Extension(app_state.di_container.category_command.clone()))
}
