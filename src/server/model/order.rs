//! Order ledger domain models and parameters.
//!
//! Orders snapshot the product price when they are created, so later catalog edits never
//! change what a session owes. Line totals and session summaries are computed by the
//! store and read back through the `FromQueryResult` models below.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::order::{CreateOrderDto, OrderLineDto, OrderSummaryDto},
    server::error::validation::ValidationError,
};

/// Validated input for placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub table_session_id: i32,
    pub product_id: i32,
    /// Always greater than zero.
    pub quantity: i32,
}

impl CreateOrderParams {
    /// Validates an order request.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Quantity is positive
    /// - `Err(ValidationError::QuantityNotPositive)` - Quantity is zero or negative
    pub fn try_from_dto(dto: CreateOrderDto) -> Result<Self, ValidationError> {
        if dto.quantity <= 0 {
            return Err(ValidationError::QuantityNotPositive);
        }

        Ok(Self {
            table_session_id: dto.table_session_id,
            product_id: dto.product_id,
            quantity: dto.quantity,
        })
    }
}

/// An order row as stored in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub table_session_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            table_session_id: entity.table_session_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// An order joined with its product name and computed line total.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct OrderLine {
    pub id: i32,
    pub table_session_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderLine {
    pub fn into_dto(self) -> OrderLineDto {
        OrderLineDto {
            id: self.id,
            table_session_id: self.table_session_id,
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            total: self.total,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Aggregate of every order in a session. Both fields are zero for an empty session.
#[derive(Debug, Clone, Default, PartialEq, FromQueryResult)]
pub struct OrderSummary {
    pub total: f64,
    pub quantity: i64,
}

impl OrderSummary {
    pub fn into_dto(self) -> OrderSummaryDto {
        OrderSummaryDto {
            total: self.total,
            quantity: self.quantity,
        }
    }
}
