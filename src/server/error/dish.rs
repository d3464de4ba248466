//! Errors for dish requests, mapped to 400 and 404 responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while handling dish requests.
#[derive(Error, Debug, PartialEq)]
pub enum DishError {
    /// One or more fields are missing, empty or negative, one entry per violation.
    #[error(
        "Model is not valid because following properties are missing: {}",
        .0.join(", ")
    )]
    Validation(Vec<String>),
    /// Update would raise the cost above the allowed factor of the stored cost.
    #[error("The new dish cost was above {max_factor} * current cost.")]
    CostIncreaseExceeded {
        /// Factor the stored cost may be multiplied by at most.
        max_factor: f64,
    },
    /// A dish with this name already exists.
    #[error("Dish with name {0} already exists.")]
    NameConflict(String),
    /// No dish exists with this ID.
    #[error("Unable to find dish with id:{0}.")]
    NotFound(i32),
    /// Request body or path could not be read into the expected shape.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl DishError {
    fn bad_request(message: String) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for DishError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(dish_id) => {
                tracing::debug!(dish_id = %dish_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Dish does not exist!".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("{}", err);

                Self::bad_request(err.to_string())
            }
        }
    }
}
