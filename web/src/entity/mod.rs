//! SeaORM entities
//!
//! Database-facing models. Domain code converts these into `domain::entities`
//! types at the adapter boundary.

pub mod questions;
