//! Factory functions for generating mock dish database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

/// Create a mock dish database model for testing.
pub fn mock_dish_model(id: i32, cost: f64) -> entity::dish::Model {
    entity::dish::Model {
        id,
        name: format!("Mock Dish {}", id),
        made_by: format!("Mock Chef {}", id),
        cost,
    }
}
