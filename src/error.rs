//! Defines the crate level error type.

use time::Date;

use crate::transaction::{TransactionId, TransactionKind};

/// The errors that may occur in the bookkeeping core.
///
/// None of these are fatal: every variant is recoverable at the call site
/// that triggered it, typically by re-prompting the user or retrying.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used as a transaction
    /// description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// A value that is not a valid monetary amount was used to create a
    /// transaction. Amounts must be finite and strictly positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Externally sourced records contained two transactions of the same
    /// kind with the same ID.
    ///
    /// IDs only need to be unique within each kind's collection, so an order
    /// and a payment may share an ID without conflict.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// The kind of the colliding records.
        kind: TransactionKind,
        /// The ID that appeared more than once.
        id: TransactionId,
    },

    /// Externally sourced records placed a transaction in the wrong
    /// collection, e.g. a payment among the orders.
    #[error("record {id} was supplied as {expected} but is a {found}")]
    MismatchedKind {
        /// The kind implied by the collection the record arrived in.
        expected: TransactionKind,
        /// The kind recorded on the transaction itself.
        found: TransactionKind,
        /// The ID of the offending record.
        id: TransactionId,
    },

    /// A date range was requested with a start date after its end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start of the range.
        start: Date,
        /// The requested end of the range.
        end: Date,
    },

    /// The initial load from the backing store failed.
    ///
    /// The ledger remains unloaded (reads see an empty store) until a retry
    /// succeeds.
    #[error("failed to fetch initial records: {0}")]
    Fetch(String),

    /// The backing store rejected a newly appended transaction.
    ///
    /// The in-memory ledger is left without the attempted record so that it
    /// never diverges from durable storage. Whether to retry is the caller's
    /// decision.
    #[error("failed to persist transaction: {0}")]
    Persist(String),
}
