//! Dish service layer.
//!
//! Runs the validate, persist & map pipeline for every dish operation and turns absent
//! records into [`DishError::NotFound`] so controllers only have to choose a status code.


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::dish::{CreateDishDto, DishDto, DishesAndAveragePriceDto, UpdateDishDto},
    server::{
        data::dish::{mean_cost, DishRepository},
        error::{dish::DishError, Error},
        validation::{
            validate_cost_increase_cap, validate_create, validate_name_unique, validate_update,
            MAX_COST_INCREASE_FACTOR,
        },
    },
};

/// Service for managing dish records.
pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    /// Creates a new instance of [`DishService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every dish along with the average cost across all dishes.
    ///
    /// The average is computed from the listed dishes so both always agree.
    ///
    /// # Returns
    /// - `Ok(DishesAndAveragePriceDto)` - All dishes ordered by ID, the average is `0` when
    ///   there are no dishes
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self) -> Result<DishesAndAveragePriceDto, Error> {
        let dish_repo = DishRepository::new(self.db);

        let dishes = dish_repo.list_all().await?;
        let costs: Vec<f64> = dishes.iter().map(|dish| dish.cost).collect();
        let average_price = mean_cost(&costs);

        Ok(DishesAndAveragePriceDto {
            dishes: dishes.into_iter().map(DishDto::from).collect(),
            average_price,
        })
    }

    /// Retrieves a single dish.
    ///
    /// # Returns
    /// - `Ok(DishDto)` - Dish found
    /// - `Err(Error::DishError(DishError::NotFound))` - No dish exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, dish_id: i32) -> Result<DishDto, Error> {
        let dish_repo = DishRepository::new(self.db);

        let dish = dish_repo
            .get_by_id(dish_id)
            .await?
            .ok_or(DishError::NotFound(dish_id))?;

        Ok(dish.into())
    }

    /// Validates and stores a new dish.
    ///
    /// The name uniqueness check and the insert run in the same transaction.
    ///
    /// # Returns
    /// - `Ok(DishDto)` - The stored dish with its assigned ID
    /// - `Err(Error::DishError(DishError::Validation))` - Missing, empty or negative fields
    /// - `Err(Error::DishError(DishError::NameConflict))` - A dish with the same name exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateDishDto) -> Result<DishDto, Error> {
        let new_dish = validate_create(dto)?;

        let txn = self.db.begin().await?;
        let dish_repo = DishRepository::new(&txn);

        let existing_dishes = dish_repo.list_all().await?;
        validate_name_unique(&new_dish.name, &existing_dishes)?;

        let dish = dish_repo.create(new_dish).await?;
        txn.commit().await?;

        Ok(dish.into())
    }

    /// Validates and applies an update to an existing dish.
    ///
    /// The new cost may be at most [`MAX_COST_INCREASE_FACTOR`] times the stored cost. A
    /// rejected update leaves the stored dish untouched.
    ///
    /// # Returns
    /// - `Ok(DishDto)` - The dish after the update
    /// - `Err(Error::DishError(DishError::Validation))` - Missing, empty or negative fields
    /// - `Err(Error::DishError(DishError::NotFound))` - No dish exists with the provided ID
    /// - `Err(Error::DishError(DishError::CostIncreaseExceeded))` - New cost above the cap
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, dish_id: i32, dto: UpdateDishDto) -> Result<DishDto, Error> {
        let changes = validate_update(dto)?;

        let txn = self.db.begin().await?;
        let dish_repo = DishRepository::new(&txn);

        let existing = dish_repo
            .get_by_id(dish_id)
            .await?
            .ok_or(DishError::NotFound(dish_id))?;
        validate_cost_increase_cap(existing.cost, changes.cost, MAX_COST_INCREASE_FACTOR)?;

        let dish = dish_repo
            .update(dish_id, changes)
            .await?
            .ok_or(DishError::NotFound(dish_id))?;
        txn.commit().await?;

        Ok(dish.into())
    }

    /// Deletes a dish.
    ///
    /// # Returns
    /// - `Ok(())` - Dish deleted
    /// - `Err(Error::DishError(DishError::NotFound))` - No dish exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, dish_id: i32) -> Result<(), Error> {
        let dish_repo = DishRepository::new(self.db);

        let result = dish_repo.delete_by_id(dish_id).await?;
        if result.rows_affected == 0 {
            return Err(DishError::NotFound(dish_id).into());
        }

        Ok(())
    }
}
