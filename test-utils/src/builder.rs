use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::JoinRecord;
///
/// let test = TestBuilder::new()
///     .with_table(JoinRecord)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether to run the deployed migrations during `build()`.
    run_migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            run_migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. The table will be created when `build()` is called.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for join ledger operations.
    ///
    /// Runs the deployed migrations instead of generating a schema from the
    /// entity: ordinal allocation depends on the exact primary-key DDL (a
    /// plain rowid key, no sqlite AUTOINCREMENT), so ledger tests must run
    /// against the same CREATE TABLE the application deploys.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_ledger_tables(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Builds the test context, creating the database and all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test context with live database
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if self.run_migrations {
            let db = context.database().await?;
            Migrator::up(db, None).await?;
        }

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
