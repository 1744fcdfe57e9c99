use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_timestamp;
use utoipa::ToSchema;

/// Detail view: everything including the creation timestamp.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub quantity: f64,
    pub price: f64,
    pub details: Option<String>,
    pub created: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            category_id: value.category_id,
            quantity: value.quantity,
            price: value.price,
            details: value.details,
            created: format_timestamp(&value.created),
        }
    }
}

/// List view: same fields minus `created`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductListResponse {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub quantity: f64,
    pub price: f64,
    pub details: Option<String>,
}

impl From<ProductModel> for ProductListResponse {
    fn from(value: ProductModel) -> Self {
        ProductListResponse {
            id: value.id,
            name: value.name,
            category_id: value.category_id,
            quantity: value.quantity,
            price: value.price,
            details: value.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_product() -> ProductModel {
        ProductModel {
            id: 7,
            name: "Hammer".into(),
            category_id: Some(1),
            quantity: 10.0,
            price: 9.99,
            details: Some("Steel".into()),
            created: NaiveDate::from_ymd_opt(2024, 12, 31)
                .unwrap()
                .and_hms_opt(23, 59, 1)
                .unwrap(),
        }
    }

    #[test]
    fn detail_view_formats_created() {
        let response = ProductResponse::from(sample_product());
        assert_eq!(response.created, "31-12-24 23:59:01");
        assert_eq!(response.price, 9.99);
        assert_eq!(response.category_id, Some(1));
    }

    #[test]
    fn list_view_omits_created() {
        let response = ProductListResponse::from(sample_product());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("created").is_none());
        assert_eq!(json["quantity"], 10.0);
    }
}
