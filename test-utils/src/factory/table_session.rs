//! Table session factory for creating open or closed sessions.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test table sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::table_session::TableSessionFactory;
///
/// let session = TableSessionFactory::new(&db, table.id)
///     .closed_at(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct TableSessionFactory<'a> {
    db: &'a DatabaseConnection,
    table_id: i32,
    opened_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

impl<'a> TableSessionFactory<'a> {
    /// Creates a new TableSessionFactory with default values.
    ///
    /// Defaults:
    /// - opened_at: now
    /// - closed_at: `None` (open)
    pub fn new(db: &'a DatabaseConnection, table_id: i32) -> Self {
        Self {
            db,
            table_id,
            opened_at: Utc::now(),
            closed_at: None,
        }
    }

    /// Sets when the session was opened.
    pub fn opened_at(mut self, opened_at: DateTime<Utc>) -> Self {
        self.opened_at = opened_at;
        self
    }

    /// Sets when the session was closed, `None` leaves it open.
    pub fn closed_at(mut self, closed_at: Option<DateTime<Utc>>) -> Self {
        self.closed_at = closed_at;
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::table_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::table_session::Model, DbErr> {
        entity::table_session::ActiveModel {
            id: ActiveValue::NotSet,
            table_id: ActiveValue::Set(self.table_id),
            opened_at: ActiveValue::Set(self.opened_at),
            closed_at: ActiveValue::Set(self.closed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open session for the given table.
pub async fn create_session(
    db: &DatabaseConnection,
    table_id: i32,
) -> Result<entity::table_session::Model, DbErr> {
    TableSessionFactory::new(db, table_id).build().await
}

/// Creates a session for the given table that was opened an hour ago and closed now.
pub async fn create_closed_session(
    db: &DatabaseConnection,
    table_id: i32,
) -> Result<entity::table_session::Model, DbErr> {
    let now = Utc::now();

    TableSessionFactory::new(db, table_id)
        .opened_at(now - Duration::hours(1))
        .closed_at(Some(now))
        .build()
        .await
}
