//! Dish repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::{mapper, model::db::DishModel, validation::NewDish};

/// Arithmetic mean of the provided costs, `0.0` when there are none
pub fn mean_cost(costs: &[f64]) -> f64 {
    if costs.is_empty() {
        return 0.0;
    }

    costs.iter().sum::<f64>() / costs.len() as f64
}

/// Repository for dish records, usable with a connection or inside a transaction.
pub struct DishRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DishRepository<'a, C> {
    /// Creates a new instance of [`DishRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every dish ordered by ID, an empty list when none exist
    pub async fn list_all(&self) -> Result<Vec<DishModel>, DbErr> {
        entity::prelude::Dish::find()
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the dish with the provided ID, `None` if it does not exist
    pub async fn get_by_id(&self, dish_id: i32) -> Result<Option<DishModel>, DbErr> {
        entity::prelude::Dish::find_by_id(dish_id).one(self.db).await
    }

    /// Inserts a new dish, the returned model carries the ID assigned by the database
    pub async fn create(&self, dish: NewDish) -> Result<DishModel, DbErr> {
        mapper::to_active_model(dish).insert(self.db).await
    }

    /// Overwrites the name, maker & cost of an existing dish
    ///
    /// Returns `Ok(None)` if no dish exists with the provided ID. The row is loaded again so
    /// the method does not depend on a prior `get_by_id` by the caller.
    pub async fn update(&self, dish_id: i32, dish: NewDish) -> Result<Option<DishModel>, DbErr> {
        let existing = match entity::prelude::Dish::find_by_id(dish_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let dish = mapper::apply_changes(existing, dish).update(self.db).await?;

        Ok(Some(dish))
    }

    /// Deletes a dish
    ///
    /// Returns OK regardless of dish existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_id(&self, dish_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Dish::delete_by_id(dish_id)
            .exec(self.db)
            .await
    }

    /// Arithmetic mean of the cost of every dish, `0.0` when there are no dishes
    pub async fn average_cost(&self) -> Result<f64, DbErr> {
        let costs: Vec<f64> = entity::prelude::Dish::find()
            .select_only()
            .column(entity::dish::Column::Cost)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(mean_cost(&costs))
    }
}
