//! Join ledger repository.
//!
//! Assigns every first-time member a unique, permanently stable ordinal.
//! Correctness under concurrent and duplicate join notifications is
//! delegated entirely to the storage layer: the unique index on `member_id`
//! is the sole source of truth for "has this member joined before", and
//! ordinal allocation piggybacks on the atomic insert, so no in-process
//! counter or lock exists that could drift from the record set. This also
//! holds across separate OS processes sharing one database.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::error::ledger::LedgerError;

/// Repository providing database operations for the join ledger.
pub struct JoinLedgerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinLedgerRepository<'a> {
    /// Creates a new JoinLedgerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `JoinLedgerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a member join and returns the member's stable ordinal.
    ///
    /// Idempotent insert-or-fetch: attempts an insert with conflict
    /// suppression keyed on the `member_id` unique index. If the insert
    /// lands, the freshly allocated `join_number` is returned. If it is
    /// suppressed because the member already holds a number (a rejoin, or a
    /// racing duplicate notification), the existing number is fetched and
    /// returned instead. Exactly one concurrent insert for a member can win;
    /// every loser observes the winner's row through the lookup.
    ///
    /// A suppressed insert whose follow-up lookup finds nothing indicates a
    /// genuine storage anomaly and is surfaced as
    /// `LedgerError::Inconsistent` rather than retried.
    ///
    /// # Arguments
    /// - `member_id` - Discord user snowflake
    /// - `display_name` - Display name snapshot taken at join time
    ///
    /// # Returns
    /// - `Ok(i32)` - The member's join number, new or pre-existing
    /// - `Err(LedgerError)` - Storage failure or detected inconsistency
    pub async fn record_join(
        &self,
        member_id: u64,
        display_name: &str,
    ) -> Result<i32, LedgerError> {
        let insert = entity::prelude::JoinRecord::insert(entity::join_record::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::join_record::Column::MemberId)
                .do_nothing()
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await;

        match insert {
            Ok(record) => Ok(record.join_number),
            // Suppressed by the unique index: the member already holds a
            // number, fetch it instead of allocating a second one. The
            // sqlite driver reports a suppressed returning insert as
            // `RecordNotFound` rather than `RecordNotInserted`.
            Err(DbErr::RecordNotInserted | DbErr::RecordNotFound(_)) => {
                match self.find_by_member_id(member_id).await? {
                    Some(record) => Ok(record.join_number),
                    None => Err(LedgerError::Inconsistent { member_id }),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up a member's join number without claiming one.
    ///
    /// Pure read with no side effect, for collaborators that need the
    /// ordinal of a member who may or may not have been recorded.
    ///
    /// # Arguments
    /// - `member_id` - Discord user snowflake
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - The member's join number
    /// - `Ok(None)` - Member was never recorded
    /// - `Err(DbErr)` - Database error during query
    pub async fn lookup_join_number(&self, member_id: u64) -> Result<Option<i32>, DbErr> {
        Ok(self
            .find_by_member_id(member_id)
            .await?
            .map(|record| record.join_number))
    }

    /// Counts recorded members, for startup logging.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of ledger rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::JoinRecord::find().count(self.db).await
    }

    async fn find_by_member_id(
        &self,
        member_id: u64,
    ) -> Result<Option<entity::join_record::Model>, DbErr> {
        entity::prelude::JoinRecord::find()
            .filter(entity::join_record::Column::MemberId.eq(member_id.to_string()))
            .one(self.db)
            .await
    }
}
