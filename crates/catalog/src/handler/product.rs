use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::{ProductListResponse, ProductResponse},
    },
    middleware::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductListResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all().await?;

    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Product name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.create_product(&body).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 409, description = "Product name already exists", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let product = service.update_product(&body).await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted, pre-delete snapshot returned", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.delete_product(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
