use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[schema(example = "Hammer")]
    pub name: String,

    #[schema(example = 1)]
    pub category_id: i32,

    #[schema(example = 10.0)]
    pub quantity: f64,

    #[schema(example = 9.99)]
    pub price: f64,

    #[validate(length(max = 200, message = "Details must be at most 200 characters"))]
    #[schema(example = "Steel")]
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    // Filled in from the path by the handler, never from the body.
    #[serde(default)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[schema(example = "Hammer")]
    pub name: String,

    #[schema(example = 1)]
    pub category_id: i32,

    #[schema(example = 10.0)]
    pub quantity: f64,

    #[schema(example = 9.99)]
    pub price: f64,

    #[validate(length(max = 200, message = "Details must be at most 200 characters"))]
    #[schema(example = "Steel")]
    pub details: String,
}
