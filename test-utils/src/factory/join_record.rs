//! Join record factory for creating test ledger rows.
//!
//! This module provides factory methods for creating join records with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test join records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::join_record::JoinRecordFactory;
///
/// let record = JoinRecordFactory::new(&db)
///     .member_id("123456789")
///     .display_name("Alice")
///     .build()
///     .await?;
/// ```
pub struct JoinRecordFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: String,
    display_name: String,
}

impl<'a> JoinRecordFactory<'a> {
    /// Creates a new JoinRecordFactory with default values.
    ///
    /// Defaults:
    /// - member_id: auto-incremented numeric string
    /// - display_name: `"Member {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `JoinRecordFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            member_id: id.to_string(),
            display_name: format!("Member {}", id),
        }
    }

    /// Sets the member ID for the record.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = member_id.into();
        self
    }

    /// Sets the display name snapshot for the record.
    ///
    /// # Arguments
    /// - `display_name` - Display name at join time
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Builds and inserts the join record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::join_record::Model)` - Created join record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::join_record::Model, DbErr> {
        entity::join_record::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            display_name: ActiveValue::Set(self.display_name),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a join record with default values.
///
/// Shorthand for `JoinRecordFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::join_record::Model)` - Created join record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_join_record(
    db: &DatabaseConnection,
) -> Result<entity::join_record::Model, DbErr> {
    JoinRecordFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_record_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_ledger_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let record = create_join_record(db).await?;

        assert!(!record.member_id.is_empty());
        assert!(!record.display_name.is_empty());
        assert!(record.join_number >= 1);

        Ok(())
    }

    #[tokio::test]
    async fn creates_record_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_ledger_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let record = JoinRecordFactory::new(db)
            .member_id("123456789")
            .display_name("Alice")
            .build()
            .await?;

        assert_eq!(record.member_id, "123456789");
        assert_eq!(record.display_name, "Alice");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_records() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_ledger_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_join_record(db).await?;
        let second = create_join_record(db).await?;

        assert_ne!(first.member_id, second.member_id);
        assert_ne!(first.join_number, second.join_number);

        Ok(())
    }
}
