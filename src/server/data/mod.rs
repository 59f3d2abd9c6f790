//! Database repository layer.
//!
//! Repositories own every SQL statement in the application. They are generic over
//! `ConnectionTrait` so services can run them against the pool or inside a transaction,
//! and they return domain models so entity types never leave this layer.

pub mod order;
pub mod product;
pub mod table;
pub mod table_session;

#[cfg(test)]
mod test;
