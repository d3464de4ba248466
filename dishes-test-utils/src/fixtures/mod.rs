//! Test fixture modules for database record creation.

pub mod dish;
