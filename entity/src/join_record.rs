//! Join ledger entity.
//!
//! One row per distinct member who has ever joined the guild. The
//! `join_number` primary key doubles as the member's permanent ordinal:
//! it is allocated by the database on first insert and never reused or
//! reassigned. `member_id` carries the Discord snowflake as text and is
//! protected by a unique index, which is what makes duplicate join
//! notifications collapse onto the existing row.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "join_record")]
pub struct Model {
    /// Permanent member ordinal, assigned by the database on insert.
    #[sea_orm(primary_key)]
    pub join_number: i32,
    /// Discord user snowflake, stored as text.
    #[sea_orm(unique)]
    pub member_id: String,
    /// Display name snapshot taken at first join; may go stale.
    pub display_name: String,
    /// Timestamp of the first recorded join.
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
