//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Existence and open/closed checks that turn into 400 responses
//! - **Transaction Management**: Every check-then-write sequence runs in one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod order;
pub mod product;
pub mod table;
pub mod table_session;
