//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, so signatures don't need to reach into the generated `entity` crate directly.

/// Type alias for the dish database model.
///
/// # Fields (from `entity::dish::Model`)
/// - `id` - Primary key, assigned by the database on insert
/// - `name` - Name of the dish
/// - `made_by` - Who makes the dish
/// - `cost` - Price of the dish, never negative
pub type DishModel = entity::dish::Model;

/// Type alias for the dish active model used for inserts and updates.
pub type DishActiveModel = entity::dish::ActiveModel;
