//! Join ledger error types.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by the join ledger.
///
/// Both variants propagate to the caller. The triggering handler is expected
/// to log and abandon the side effect for that notification; it must never
/// synthesize an ordinal of its own.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The insert was suppressed by the unique index but the follow-up
    /// lookup found no row. This can only happen when a racing transaction's
    /// insert was rolled back or the store is misbehaving, so it is surfaced
    /// rather than retried.
    #[error("join ledger has no record for member {member_id} after a suppressed insert")]
    Inconsistent { member_id: u64 },

    /// Storage or connectivity failure during insert or lookup.
    #[error(transparent)]
    Db(#[from] DbErr),
}
