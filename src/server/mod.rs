//! Server application core modules.
//!
//! This module contains all server-side functionality for the dish service, including
//! HTTP routing, request validation, database access through SeaORM repositories and the
//! mapping between stored records and the transfer objects returned to API consumers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod mapper;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validation;
