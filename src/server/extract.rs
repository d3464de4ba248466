//! Request extractors that report rejections as [`Error`] responses.
//!
//! Axum's own `Json` and `Path` extractors answer bad input with plain text bodies and
//! a mix of 400, 415 and 422 status codes. These wrappers route every rejection through
//! [`DishError::MalformedRequest`](crate::server::error::dish::DishError::MalformedRequest)
//! so clients always receive a 400 with an `ErrorDto` body.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// JSON request body, rejected with a 400 `ErrorDto` when it cannot be deserialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

/// Path parameters, rejected with a 400 `ErrorDto` when they cannot be parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}
