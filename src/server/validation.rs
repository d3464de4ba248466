//! Validation rules for dish input.
//!
//! Field checks collect every violation before failing so API consumers can fix all of
//! their input in one round trip. A successful check produces a [`NewDish`], which is the
//! only shape the repository accepts for writes.

use crate::{
    model::dish::{CreateDishDto, UpdateDishDto},
    server::{error::dish::DishError, model::db::DishModel},
};

/// Maximum factor a dish cost may be raised by in a single update.
pub const MAX_COST_INCREASE_FACTOR: f64 = 1.2;

/// Dish fields that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDish {
    /// Non-empty dish name.
    pub name: String,
    /// Non-empty name of whoever makes the dish.
    pub made_by: String,
    /// Non-negative cost.
    pub cost: f64,
}

/// Validates the body of a create request.
///
/// # Returns
/// - `Ok(NewDish)` - Name & maker are present and non-empty, cost is present and not negative
/// - `Err(DishError::Validation)` - Every violated field, in the order name, cost, maker
pub fn validate_create(dto: CreateDishDto) -> Result<NewDish, DishError> {
    validate_fields(dto.name, dto.made_by, dto.cost)
}

/// Validates the body of an update request, applying the same field rules as create.
pub fn validate_update(dto: UpdateDishDto) -> Result<NewDish, DishError> {
    validate_fields(dto.name, dto.made_by, dto.cost)
}

/// Fails with [`DishError::NameConflict`] if any existing dish has exactly the same name.
pub fn validate_name_unique(name: &str, existing_dishes: &[DishModel]) -> Result<(), DishError> {
    if existing_dishes.iter().any(|dish| dish.name == name) {
        return Err(DishError::NameConflict(name.to_string()));
    }

    Ok(())
}

/// Fails with [`DishError::CostIncreaseExceeded`] if `new_cost` is above `old_cost * max_factor`.
///
/// Equal to the cap is allowed, the comparison tolerates floating point rounding of the
/// product so that e.g. `3.0 -> 3.6` passes with a factor of `1.2`.
pub fn validate_cost_increase_cap(
    old_cost: f64,
    new_cost: f64,
    max_factor: f64,
) -> Result<(), DishError> {
    let cap = old_cost * max_factor;
    let tolerance = f64::EPSILON * new_cost.abs().max(cap.abs()).max(1.0);

    if new_cost - cap > tolerance {
        return Err(DishError::CostIncreaseExceeded { max_factor });
    }

    Ok(())
}

fn validate_fields(
    name: Option<String>,
    made_by: Option<String>,
    cost: Option<f64>,
) -> Result<NewDish, DishError> {
    let mut violations = Vec::new();

    let name = require_non_empty("Name", name, &mut violations);
    let cost = require_non_negative("Cost", cost, &mut violations);
    let made_by = require_non_empty("MadeBy", made_by, &mut violations);

    match (name, made_by, cost) {
        (Some(name), Some(made_by), Some(cost)) => Ok(NewDish {
            name,
            made_by,
            cost,
        }),
        _ => Err(DishError::Validation(violations)),
    }
}

fn require_non_empty(
    field: &str,
    value: Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value {
        None => {
            violations.push(field.to_string());
            None
        }
        Some(value) if value.is_empty() => {
            violations.push(format!("{} was empty.", field));
            None
        }
        Some(value) => Some(value),
    }
}

fn require_non_negative(
    field: &str,
    value: Option<f64>,
    violations: &mut Vec<String>,
) -> Option<f64> {
    match value {
        None => {
            violations.push(field.to_string());
            None
        }
        Some(value) if value < 0.0 => {
            violations.push(format!("{} was a negative value.", field));
            None
        }
        Some(value) => Some(value),
    }
}
