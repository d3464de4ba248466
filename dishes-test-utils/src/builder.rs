//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// dish fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_dish_tables: bool,

    dishes: Vec<(String, String, f64)>, // (name, made_by, cost)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the dish table to the test database.
    pub fn with_dish_tables(mut self) -> Self {
        self.include_dish_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dishes_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), dishes_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Dish)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a dish into the database.
    ///
    /// Dishes are inserted in the order they are queued, so IDs ascend in that order. The
    /// dish table must be included via `with_dish_tables` or `with_table`.
    pub fn with_dish(
        mut self,
        name: impl Into<String>,
        made_by: impl Into<String>,
        cost: f64,
    ) -> Self {
        self.dishes.push((name.into(), made_by.into(), cost));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_dish_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Dish));
        }
        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (name, made_by, cost) in self.dishes {
            context.dish().insert_dish(name, made_by, cost).await?;
        }

        Ok(context)
    }
}
