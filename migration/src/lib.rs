pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_products_table;
mod m20260105_000002_create_tables_table;
mod m20260105_000003_create_tables_sessions_table;
mod m20260105_000004_create_orders_table;
mod m20260105_000005_create_open_session_index;

/// SQL used by the open-session uniqueness index, exposed so the test harness can
/// reproduce the constraint on schemas built straight from the entities.
pub use m20260105_000005_create_open_session_index::OPEN_SESSION_INDEX_SQL;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_products_table::Migration),
            Box::new(m20260105_000002_create_tables_table::Migration),
            Box::new(m20260105_000003_create_tables_sessions_table::Migration),
            Box::new(m20260105_000004_create_orders_table::Migration),
            Box::new(m20260105_000005_create_open_session_index::Migration),
        ]
    }
}
