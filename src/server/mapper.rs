//! Conversion between stored dish records and transfer objects.
//!
//! Mapping is field-for-field, no values are transformed on the way in or out.

use sea_orm::{ActiveValue, IntoActiveModel};

use crate::{
    model::dish::DishDto,
    server::{
        model::db::{DishActiveModel, DishModel},
        validation::NewDish,
    },
};

impl From<DishModel> for DishDto {
    fn from(dish: DishModel) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            made_by: dish.made_by,
            cost: dish.cost,
        }
    }
}

/// Builds an active model for inserting a new dish, leaving the ID for the database to assign.
pub fn to_active_model(dish: NewDish) -> DishActiveModel {
    DishActiveModel {
        name: ActiveValue::Set(dish.name),
        made_by: ActiveValue::Set(dish.made_by),
        cost: ActiveValue::Set(dish.cost),
        ..Default::default()
    }
}

/// Overwrites every editable field of a stored dish, keeping its ID.
pub fn apply_changes(existing: DishModel, changes: NewDish) -> DishActiveModel {
    let mut dish_am = existing.into_active_model();
    dish_am.name = ActiveValue::Set(changes.name);
    dish_am.made_by = ActiveValue::Set(changes.made_by);
    dish_am.cost = ActiveValue::Set(changes.cost);

    dish_am
}
