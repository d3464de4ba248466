//! Dish fixture utilities.
//!
//! Provides methods for inserting dish records into the test database and factory
//! functions for creating in-memory model instances.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn dish<'a>(&'a self) -> DishFixtures<'a> {
        DishFixtures { context: self }
    }
}

pub struct DishFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> DishFixtures<'a> {
    pub async fn insert_dish(
        &self,
        name: impl Into<String>,
        made_by: impl Into<String>,
        cost: f64,
    ) -> Result<entity::dish::Model, TestError> {
        Ok(
            entity::prelude::Dish::insert(entity::dish::ActiveModel {
                name: ActiveValue::Set(name.into()),
                made_by: ActiveValue::Set(made_by.into()),
                cost: ActiveValue::Set(cost),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a dish with generated name & maker, unique per `seed`
    pub async fn insert_mock_dish(
        &self,
        seed: i32,
        cost: f64,
    ) -> Result<entity::dish::Model, TestError> {
        self.insert_dish(
            format!("Mock Dish {}", seed),
            format!("Mock Chef {}", seed),
            cost,
        )
        .await
    }
}
