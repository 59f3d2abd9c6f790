//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a table and an open session on it.
///
/// # Returns
/// - `Ok((table, session))` - The created table and its open session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_open_session(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant_table::Model,
        entity::table_session::Model,
    ),
    DbErr,
> {
    let table = crate::factory::restaurant_table::create_table(db).await?;
    let session = crate::factory::table_session::create_session(db, table.id).await?;

    Ok((table, session))
}

/// Creates a table and a session on it that has already been closed.
///
/// # Returns
/// - `Ok((table, session))` - The created table and its closed session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_closed_session(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant_table::Model,
        entity::table_session::Model,
    ),
    DbErr,
> {
    let table = crate::factory::restaurant_table::create_table(db).await?;
    let session = crate::factory::table_session::create_closed_session(db, table.id).await?;

    Ok((table, session))
}

/// Creates a complete order with all of its dependencies.
///
/// Creates, in order:
/// 1. Product
/// 2. Table
/// 3. Open session on the table
/// 4. Order for the product in that session
///
/// # Returns
/// - `Ok((product, table, session, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::product::Model,
        entity::restaurant_table::Model,
        entity::table_session::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let product = crate::factory::product::create_product(db).await?;
    let (table, session) = create_open_session(db).await?;
    let order = crate::factory::order::create_order(db, session.id, product.id).await?;

    Ok((product, table, session, order))
}
