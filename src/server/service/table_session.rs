use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{table::TableRepository, table_session::TableSessionRepository},
    error::AppError,
    model::table_session::TableSession,
};

pub const TABLE_NOT_FOUND: &str = "Table not found!";
pub const TABLE_ALREADY_OPEN: &str = "This table is already open!";
pub const SESSION_NOT_FOUND: &str = "Session table not found!";
pub const SESSION_ALREADY_CLOSED: &str = "This session is already closed!";

pub struct TableSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new session on a table
    ///
    /// Only the most recently opened session of the table is inspected. A concurrent
    /// open that slips past that check is stopped by the one-open-session-per-table
    /// index and reported the same way.
    ///
    /// # Returns
    /// - `Ok(TableSession)` - The new open session
    /// - `Err(AppError::NotFound)` - The table does not exist
    /// - `Err(AppError::Conflict)` - The table already has an open session
    pub async fn open(&self, table_id: i32) -> Result<TableSession, AppError> {
        let txn = self.db.begin().await?;
        let table_repo = TableRepository::new(&txn);
        let session_repo = TableSessionRepository::new(&txn);

        if !table_repo.exists(table_id).await? {
            return Err(AppError::NotFound(TABLE_NOT_FOUND.to_string()));
        }

        if let Some(latest) = session_repo.find_latest_for_table(table_id).await? {
            if latest.is_open() {
                return Err(AppError::Conflict(TABLE_ALREADY_OPEN.to_string()));
            }
        }

        let session = match session_repo.open(table_id).await {
            Ok(session) => session,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AppError::Conflict(TABLE_ALREADY_OPEN.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!("Opened session {} on table {}", session.id, table_id);

        Ok(session)
    }

    /// Lists all sessions, open ones first
    pub async fn list(&self) -> Result<Vec<TableSession>, AppError> {
        let repo = TableSessionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Closes an open session
    ///
    /// # Returns
    /// - `Ok(TableSession)` - The session with `closed_at` set
    /// - `Err(AppError::NotFound)` - No session with that ID
    /// - `Err(AppError::Conflict)` - The session was already closed
    pub async fn close(&self, id: i32) -> Result<TableSession, AppError> {
        let txn = self.db.begin().await?;
        let repo = TableSessionRepository::new(&txn);

        let Some(session) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(SESSION_NOT_FOUND.to_string()));
        };

        if !session.is_open() {
            return Err(AppError::Conflict(SESSION_ALREADY_CLOSED.to_string()));
        }

        let session = repo.close(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Closed session {} on table {}",
            session.id,
            session.table_id
        );

        Ok(session)
    }
}
