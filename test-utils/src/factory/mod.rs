//! Factories for creating test entities with sensible defaults.

pub mod helpers;
pub mod join_record;
