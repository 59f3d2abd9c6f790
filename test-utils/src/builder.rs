use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Product, RestaurantTable};
///
/// let test = TestBuilder::new()
///     .with_table(Product)
///     .with_table(RestaurantTable)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after every table has been created.
    ///
    /// Used for schema objects SeaORM cannot derive from an entity, such as the
    /// partial unique index guarding open table sessions.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the unique index that allows at most one open session per table.
    ///
    /// Requires the `TableSession` table to have been added first.
    pub fn with_open_session_index(mut self) -> Self {
        self.statements
            .push(migration::OPEN_SESSION_INDEX_SQL.to_string());
        self
    }

    /// Adds every table of the ordering schema in dependency order.
    ///
    /// This convenience method adds:
    /// - Product
    /// - RestaurantTable
    /// - TableSession (plus the open-session unique index)
    /// - Order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_ordering_tables(self) -> Self {
        self.with_table(Product)
            .with_table(RestaurantTable)
            .with_table(TableSession)
            .with_table(Order)
            .with_open_session_index()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all configured
    /// statements in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}
