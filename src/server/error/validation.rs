use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use thiserror::Error;

/// Request input that failed shape or value validation.
///
/// Every variant results in a 400 Bad Request with the display message as body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Product name is shorter than the minimum once surrounding whitespace is removed.
    #[error("Name must be at least {min} characters long")]
    NameTooShort {
        /// Minimum accepted length in characters
        min: usize,
    },

    /// Product price is zero, negative, or not a finite number.
    #[error("Price must be greater than zero")]
    PriceNotPositive,

    /// Order quantity is zero or negative.
    #[error("Quantity must be greater than zero")]
    QuantityNotPositive,

    /// Request body could not be deserialized into the expected shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// Path identifier is not a valid number.
    #[error("Id must be a number: {0}")]
    InvalidId(String),

    /// Query string could not be deserialized.
    #[error("Invalid query parameters: {0}")]
    MalformedQuery(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidId(rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection.body_text())
    }
}
