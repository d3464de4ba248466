//! Business logic services.
//!
//! Services sit between the HTTP controllers and the data layer. They validate input,
//! coordinate repository calls inside transactions where a check and a write must be
//! atomic, and map stored records into transfer objects.

pub mod dish;
