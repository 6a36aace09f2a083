use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JoinRecord::Table)
                    .if_not_exists()
                    // Plain INTEGER PRIMARY KEY, not sqlite AUTOINCREMENT: a
                    // conflict-suppressed insert must not consume an ordinal.
                    .col(integer(JoinRecord::JoinNumber).primary_key())
                    .col(string_uniq(JoinRecord::MemberId))
                    .col(string(JoinRecord::DisplayName))
                    .col(timestamp_with_time_zone(JoinRecord::JoinedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JoinRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum JoinRecord {
    Table,
    JoinNumber,
    MemberId,
    DisplayName,
    JoinedAt,
}
