//! SeaORM entity models for the restaurant ordering schema.

pub mod prelude;

pub mod order;
pub mod product;
pub mod restaurant_table;
pub mod table_session;
