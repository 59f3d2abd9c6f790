use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        order::OrderRepository, product::ProductRepository, table_session::TableSessionRepository,
    },
    error::AppError,
    model::order::{CreateOrderParams, Order, OrderLine, OrderSummary},
    service::product::PRODUCT_NOT_FOUND,
};

pub const ORDER_SESSION_NOT_FOUND: &str = "Session table not found";
pub const SESSION_CLOSED: &str = "This table is closed";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order in an open session, capturing the product's current price
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order
    /// - `Err(AppError::NotFound)` - The session or the product does not exist
    /// - `Err(AppError::Conflict)` - The session is closed
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let Some(session) = TableSessionRepository::new(&txn)
            .find_by_id(params.table_session_id)
            .await?
        else {
            return Err(AppError::NotFound(ORDER_SESSION_NOT_FOUND.to_string()));
        };

        if !session.is_open() {
            return Err(AppError::Conflict(SESSION_CLOSED.to_string()));
        }

        let Some(product) = ProductRepository::new(&txn)
            .find_by_id(params.product_id)
            .await?
        else {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        };

        let order = OrderRepository::new(&txn)
            .create(params, product.price)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Order {} placed in session {} for product {}",
            order.id,
            order.table_session_id,
            order.product_id
        );

        Ok(order)
    }

    /// Lists a session's orders, newest first, with product names and line totals
    ///
    /// An unknown session yields an empty list.
    pub async fn list_by_session(&self, table_session_id: i32) -> Result<Vec<OrderLine>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_lines_by_session(table_session_id).await?)
    }

    /// Sums the amount owed and the number of items ordered in a session
    pub async fn summary(&self, table_session_id: i32) -> Result<OrderSummary, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_summary(table_session_id).await?)
    }
}
