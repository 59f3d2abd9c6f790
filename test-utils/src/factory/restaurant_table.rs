//! Table factory for creating physical restaurant tables.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tables with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant_table::TableFactory;
///
/// let table = TableFactory::new(&db).table_number(12).build().await?;
/// ```
pub struct TableFactory<'a> {
    db: &'a DatabaseConnection,
    table_number: i32,
}

impl<'a> TableFactory<'a> {
    /// Creates a new TableFactory with default values.
    ///
    /// Defaults:
    /// - table_number: a unique number offset well above realistic table numbers so it
    ///   never collides with numbers chosen explicitly by a test
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            table_number: 10_000 + id as i32,
        }
    }

    /// Sets the table number.
    pub fn table_number(mut self, table_number: i32) -> Self {
        self.table_number = table_number;
        self
    }

    /// Builds and inserts the table entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant_table::Model)` - Created table entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant_table::Model, DbErr> {
        let now = Utc::now();

        entity::restaurant_table::ActiveModel {
            id: ActiveValue::NotSet,
            table_number: ActiveValue::Set(self.table_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a table with default values.
pub async fn create_table(
    db: &DatabaseConnection,
) -> Result<entity::restaurant_table::Model, DbErr> {
    TableFactory::new(db).build().await
}
