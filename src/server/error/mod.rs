//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by services and controllers; its `IntoResponse` implementation is the
//! single place where error kinds become status codes.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Business errors (`Validation`, `NotFound`, `Conflict`) carry a human readable
/// message and map to 400 Bad Request. Everything else is unexpected and maps to
/// 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced resource does not exist.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Resource is in a state that does not allow the operation.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the raw error message.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.into())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `NotFound` and `Conflict`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::Conflict(_) => {
                tracing::debug!("Rejected request: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        message: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and forwards its message to the client unchanged.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
