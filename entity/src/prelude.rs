pub use super::dish::Entity as Dish;
