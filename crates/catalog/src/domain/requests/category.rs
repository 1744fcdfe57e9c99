use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[schema(example = "Tools")]
    pub name: String,

    #[validate(length(max = 200, message = "Details must be at most 200 characters"))]
    #[schema(example = "Hand tools")]
    pub details: String,
}
