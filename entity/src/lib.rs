//! SeaORM entity models for the doorkeeper database schema.

pub mod join_record;
pub mod prelude;
