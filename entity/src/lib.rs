pub mod prelude;

pub mod dish;
