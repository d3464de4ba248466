//! Transfer objects exchanged with API consumers.
//!
//! These types define the JSON request and response bodies of the HTTP API. They are
//! distinct from the `entity` crate's database models, conversion between the two lives
//! in [`crate::server::mapper`].

pub mod api;
pub mod dish;
