//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry validated operation input:
//! constructing one from a DTO is where request validation happens, so services only
//! ever see values that already satisfy the catalog and ledger rules.

pub mod order;
pub mod product;
pub mod table;
pub mod table_session;
