use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::order::{CreateOrderParams, Order, OrderLine, OrderSummary};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order priced at `unit_price`
    ///
    /// The caller passes the product's current price, which is stored on the order and
    /// never refreshed afterwards.
    pub async fn create(&self, params: CreateOrderParams, unit_price: f64) -> Result<Order, DbErr> {
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            table_session_id: ActiveValue::Set(params.table_session_id),
            product_id: ActiveValue::Set(params.product_id),
            quantity: ActiveValue::Set(params.quantity),
            price: ActiveValue::Set(unit_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(order))
    }

    /// Gets every order of a session with its product name and line total, newest first
    pub async fn get_lines_by_session(
        &self,
        table_session_id: i32,
    ) -> Result<Vec<OrderLine>, DbErr> {
        entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Id)
            .column(entity::order::Column::TableSessionId)
            .column(entity::order::Column::ProductId)
            .column_as(entity::product::Column::Name, "name")
            .column(entity::order::Column::Price)
            .column(entity::order::Column::Quantity)
            .column_as(
                Expr::cust("\"orders\".\"price\" * \"orders\".\"quantity\""),
                "total",
            )
            .column(entity::order::Column::CreatedAt)
            .column(entity::order::Column::UpdatedAt)
            .join(JoinType::InnerJoin, entity::order::Relation::Product.def())
            .filter(entity::order::Column::TableSessionId.eq(table_session_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .into_model::<OrderLine>()
            .all(self.db)
            .await
    }

    /// Sums line totals and quantities over every order of a session
    ///
    /// Both sums fall back to zero when the session has no orders.
    pub async fn get_summary(&self, table_session_id: i32) -> Result<OrderSummary, DbErr> {
        let summary = entity::prelude::Order::find()
            .select_only()
            .column_as(
                Expr::cust("COALESCE(SUM(\"orders\".\"price\" * \"orders\".\"quantity\"), 0.0)"),
                "total",
            )
            .column_as(
                Expr::cust("COALESCE(SUM(\"orders\".\"quantity\"), 0)"),
                "quantity",
            )
            .filter(entity::order::Column::TableSessionId.eq(table_session_id))
            .into_model::<OrderSummary>()
            .one(self.db)
            .await?;

        Ok(summary.unwrap_or_default())
    }
}
