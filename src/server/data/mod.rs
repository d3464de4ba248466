//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They are generic
//! over SeaORM's `ConnectionTrait` so the same queries run against the connection pool or
//! inside a transaction opened by a service.

pub mod dish;
