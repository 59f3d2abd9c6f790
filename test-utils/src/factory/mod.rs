//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `*Factory` builder for customization and a `create_*`
//! shorthand for the defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let product = factory::create_product(&db).await?;
//! let (table, session) = factory::helpers::create_open_session(&db).await?;
//! let order = factory::create_order(&db, session.id, product.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pizza = factory::product::ProductFactory::new(&db)
//!     .name("Pizza")
//!     .price(88.99)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod order;
pub mod product;
pub mod restaurant_table;
pub mod table_session;

pub use order::create_order;
pub use product::create_product;
pub use restaurant_table::create_table;
pub use table_session::{create_closed_session, create_session};
