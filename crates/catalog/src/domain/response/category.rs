use crate::model::category::Category as CategoryModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_timestamp;
use utoipa::ToSchema;

/// Detail view: everything including the creation timestamp.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub details: Option<String>,
    pub created: String,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(value: CategoryModel) -> Self {
        CategoryResponse {
            id: value.id,
            name: value.name,
            details: value.details,
            created: format_timestamp(&value.created),
        }
    }
}

/// List view: same fields minus `created`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoryListResponse {
    pub id: i32,
    pub name: String,
    pub details: Option<String>,
}

impl From<CategoryModel> for CategoryListResponse {
    fn from(value: CategoryModel) -> Self {
        CategoryListResponse {
            id: value.id,
            name: value.name,
            details: value.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_category() -> CategoryModel {
        CategoryModel {
            id: 1,
            name: "Tools".into(),
            details: Some("Hand tools".into()),
            created: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(9, 5, 30)
                .unwrap(),
        }
    }

    #[test]
    fn detail_view_formats_created() {
        let response = CategoryResponse::from(sample_category());
        assert_eq!(response.created, "07-03-24 09:05:30");
        assert_eq!(response.name, "Tools");
    }

    #[test]
    fn list_view_omits_created() {
        let response = CategoryListResponse::from(sample_category());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("created").is_none());
        assert_eq!(json["details"], "Hand tools");
    }
}
