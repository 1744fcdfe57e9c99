use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub quantity: f64,
    pub price: f64,
    pub details: Option<String>,
    pub created: NaiveDateTime,
}
