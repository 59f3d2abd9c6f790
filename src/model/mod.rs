//! Wire-level DTOs shared by the HTTP API.
//!
//! These types describe request and response bodies exactly as they appear on the wire.
//! Server-side domain models convert to and from them at the controller boundary.

pub mod api;
pub mod order;
pub mod product;
pub mod table;
pub mod table_session;
