//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into operation
//! parameters, call the matching service and turn the domain result back into a DTO.
//! Extractor rejections are taken as `Result`s so malformed input becomes an
//! `AppError` with a 400 response instead of axum's plain-text rejection.

pub mod order;
pub mod product;
pub mod table;
pub mod table_session;

#[cfg(test)]
mod test;
