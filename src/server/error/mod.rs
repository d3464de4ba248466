//! Error types for the dish server application.
//!
//! This module provides the error handling system for the server, with specialized error
//! types for dish operations and configuration. [`Error`] and [`dish::DishError`] implement
//! `IntoResponse` for Axum HTTP responses, every error uses `thiserror` for `Display` and
//! `Error` trait implementations.

pub mod config;
pub mod dish;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, dish::DishError},
};

/// Main error type for the dish server application.
///
/// This enum aggregates domain-specific error types and external library errors into a
/// single unified error type. `#[from]` conversions allow the `?` operator to be used across
/// validation, repository and startup code. The `IntoResponse` implementation maps errors to
/// HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables), only raised during
    /// startup.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Dish error (validation failure, name conflict, dish not found).
    #[error(transparent)]
    DishError(#[from] DishError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::DishError(DishError::MalformedRequest(rejection.body_text()))
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::DishError(DishError::MalformedRequest(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// Dish errors carry their own client-facing mapping, everything else is treated as an
/// internal server error.
///
/// # Returns
/// - 400 Bad Request - Invalid dish input, unreadable body or path, cost increase above the
///   cap, or duplicate name
/// - 404 Not Found - No dish exists for the requested ID
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::DishError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
