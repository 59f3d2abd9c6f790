use chrono::Utc;
use sea_orm::{
    sea_query::{NullOrdering, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::table_session::TableSession;

pub struct TableSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a session by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TableSession>, DbErr> {
        let session = entity::prelude::TableSession::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(session.map(TableSession::from_entity))
    }

    /// Gets the most recently opened session for a table, open or not
    pub async fn find_latest_for_table(
        &self,
        table_id: i32,
    ) -> Result<Option<TableSession>, DbErr> {
        let session = entity::prelude::TableSession::find()
            .filter(entity::table_session::Column::TableId.eq(table_id))
            .order_by_desc(entity::table_session::Column::OpenedAt)
            .order_by_desc(entity::table_session::Column::Id)
            .one(self.db)
            .await?;

        Ok(session.map(TableSession::from_entity))
    }

    /// Gets all sessions, open sessions first, then closed ones by closing time
    pub async fn get_all(&self) -> Result<Vec<TableSession>, DbErr> {
        let sessions = entity::prelude::TableSession::find()
            .order_by_with_nulls(
                entity::table_session::Column::ClosedAt,
                Order::Asc,
                NullOrdering::First,
            )
            .order_by_asc(entity::table_session::Column::Id)
            .all(self.db)
            .await?;

        Ok(sessions
            .into_iter()
            .map(TableSession::from_entity)
            .collect())
    }

    /// Inserts a new open session for the table
    pub async fn open(&self, table_id: i32) -> Result<TableSession, DbErr> {
        let session = entity::table_session::ActiveModel {
            table_id: ActiveValue::Set(table_id),
            opened_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TableSession::from_entity(session))
    }

    /// Stamps `closed_at` with the current time
    ///
    /// Fails with `DbErr::RecordNotUpdated` if the session does not exist.
    pub async fn close(&self, id: i32) -> Result<TableSession, DbErr> {
        let session = entity::table_session::ActiveModel {
            id: ActiveValue::Unchanged(id),
            closed_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(TableSession::from_entity(session))
    }
}
