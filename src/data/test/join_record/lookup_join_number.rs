use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::factory::join_record::JoinRecordFactory;

/// Tests lookup of a member that was never recorded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JoinLedgerRepository::new(db);
    let result = repo.lookup_join_number(12345).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests lookup of a recorded member.
///
/// Expected: Ok(Some(join_number)) matching the stored row
#[tokio::test]
async fn returns_existing_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = JoinRecordFactory::new(db).member_id("42").build().await?;

    let repo = JoinLedgerRepository::new(db);
    let result = repo.lookup_join_number(42).await?;

    assert_eq!(result, Some(record.join_number));

    Ok(())
}

/// Tests that lookup is a pure read.
///
/// Verifies a lookup for an unknown member neither inserts a row nor
/// consumes an ordinal: the next recorded member still gets number 1.
///
/// Expected: no rows after lookup, first join gets 1
#[tokio::test]
async fn lookup_has_no_side_effect() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JoinLedgerRepository::new(db);

    assert!(repo.lookup_join_number(7).await?.is_none());

    let rows = entity::prelude::JoinRecord::find().count(db).await?;
    assert_eq!(rows, 0);

    assert_eq!(repo.record_join(7, "Alice").await.unwrap(), 1);

    Ok(())
}
