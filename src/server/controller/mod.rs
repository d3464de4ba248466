//! HTTP controller endpoints for the dish web API.
//!
//! This module contains Axum handlers for the dish resource. Controllers bind path and
//! body input, delegate to [`crate::server::service`], and choose the HTTP status code for
//! the response. They use utoipa for OpenAPI documentation.

pub mod dish;
