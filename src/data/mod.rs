//! Database repository layer.
//!
//! Repositories perform all database operations and keep SeaORM entity
//! models behind the data-layer boundary.

pub mod join_record;

pub use join_record::JoinLedgerRepository;

#[cfg(test)]
mod test;
