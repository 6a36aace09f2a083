use crate::data::join_record::JoinLedgerRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod lookup_join_number;
mod record_join;
