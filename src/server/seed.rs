//! Optional initial data for a fresh database.
//!
//! Seeding only ever fills empty tables, so enabling it on an existing deployment leaves
//! the catalog and floor plan alone.

use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

/// Default catalog as `(name, price)`.
pub const DEFAULT_PRODUCTS: [(&str, f64); 10] = [
    ("Batata frita", 30.99),
    ("Tomate defumado", 11.99),
    ("Whey protein com mingau", 22.99),
    ("Tilapia", 40.99),
    ("Batata doce assada", 20.99),
    ("Ovos fritos", 17.99),
    ("Frutas com iorgute", 12.99),
    ("Pizza", 88.99),
    ("Hamburguer", 26.99),
    ("Coca-Cola Zero", 10.99),
];

/// Rows per table insert statement. Each row binds three values and SQLite caps the bind
/// variables of one statement at 999 on older builds.
const TABLE_BATCH_SIZE: usize = 250;

/// Inserts the default catalog and tables numbered `1..=table_count`.
///
/// Each of the two tables is only filled when it holds no rows.
///
/// # Returns
/// - `Ok((products, tables))` - Number of rows inserted into each table
/// - `Err(DbErr)` - Database error while counting or inserting
pub async fn seed_database<C: ConnectionTrait>(
    db: &C,
    table_count: i32,
) -> Result<(usize, usize), DbErr> {
    let products = seed_products(db).await?;
    let tables = seed_tables(db, table_count).await?;

    tracing::info!("Seeded {} products and {} tables", products, tables);

    Ok((products, tables))
}

async fn seed_products<C: ConnectionTrait>(db: &C) -> Result<usize, DbErr> {
    if entity::prelude::Product::find().count(db).await? > 0 {
        tracing::debug!("Products already present, skipping catalog seed");
        return Ok(0);
    }

    let now = Utc::now();
    let models = DEFAULT_PRODUCTS
        .iter()
        .map(|(name, price)| entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            price: ActiveValue::Set(*price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

    entity::prelude::Product::insert_many(models)
        .exec(db)
        .await?;

    Ok(DEFAULT_PRODUCTS.len())
}

async fn seed_tables<C: ConnectionTrait>(db: &C, table_count: i32) -> Result<usize, DbErr> {
    if table_count <= 0 {
        return Ok(0);
    }

    if entity::prelude::RestaurantTable::find().count(db).await? > 0 {
        tracing::debug!("Tables already present, skipping table seed");
        return Ok(0);
    }

    let now = Utc::now();
    let last_offset = TABLE_BATCH_SIZE as i32 - 1;

    for first in (1..=table_count).step_by(TABLE_BATCH_SIZE) {
        let last = table_count.min(first.saturating_add(last_offset));
        let models = (first..=last).map(|table_number| entity::restaurant_table::ActiveModel {
            table_number: ActiveValue::Set(table_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::RestaurantTable::insert_many(models)
            .exec(db)
            .await?;
    }

    Ok(table_count as usize)
}
