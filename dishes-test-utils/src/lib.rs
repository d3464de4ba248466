//! Test utilities for the dish service.
//!
//! Tests follow two phases: a [`TestBuilder`] declares the tables and fixtures a test needs,
//! then the [`TestContext`] it builds exposes the in-memory database and fixture helpers
//! while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::dish::factory, test_setup_with_dish_tables, test_setup_with_tables,
        TestBuilder, TestContext, TestError,
    };
}
