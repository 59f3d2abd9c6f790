use sea_orm_migration::prelude::*;

/// Partial unique index allowing at most one open session per table.
pub const OPEN_SESSION_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_tables_sessions_one_open_per_table \
     ON tables_sessions (table_id) WHERE closed_at IS NULL";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(OPEN_SESSION_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_tables_sessions_one_open_per_table")
            .await?;

        Ok(())
    }
}
