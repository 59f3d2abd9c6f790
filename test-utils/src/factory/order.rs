//! Order factory for creating session line items.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Inserts the row directly, bypassing the business rules enforced by the order
/// service, so tests can arrange any state they need.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, session.id, product.id)
///     .quantity(2)
///     .price(88.99)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    table_session_id: i32,
    product_id: i32,
    quantity: i32,
    price: f64,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - quantity: `1`
    /// - price: `10.0`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, table_session_id: i32, product_id: i32) -> Self {
        Self {
            db,
            table_session_id,
            product_id,
            quantity: 1,
            price: 10.0,
            created_at: Utc::now(),
        }
    }

    /// Sets the ordered quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the captured unit price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            table_session_id: ActiveValue::Set(self.table_session_id),
            product_id: ActiveValue::Set(self.product_id),
            quantity: ActiveValue::Set(self.quantity),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given session and product.
pub async fn create_order(
    db: &DatabaseConnection,
    table_session_id: i32,
    product_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, table_session_id, product_id)
        .build()
        .await
}
