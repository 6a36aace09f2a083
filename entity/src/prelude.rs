pub use super::join_record::Entity as JoinRecord;
