use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub table_session_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// A single order line of a table session, joined with its product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineDto {
    pub id: i32,
    pub table_session_id: i32,
    pub product_id: i32,
    /// Product name at the time of listing.
    pub name: String,
    /// Unit price captured when the order was placed.
    pub price: f64,
    pub quantity: i32,
    /// `price * quantity`
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderSummaryDto {
    pub total: f64,
    pub quantity: i64,
}
