use axum::{Json, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Welcome message", body = serde_json::Value)
    )
)]
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Welcome to my API." })))
}

pub fn home_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(index))
        .route("/home", get(index))
        .route("/index", get(index))
}
