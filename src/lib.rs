//! Khata is a bookkeeping core that records orders (money owed) and payments
//! (money received) and reports totals over day, week, and month windows.
//!
//! This library owns the transaction ledger and its aggregation engine: the
//! validated [Money] amount, the immutable [Transaction] record, the
//! [Ledger] store that mints identity and timestamps, pure date-bucketing
//! functions in [aggregate], and the [LedgerService] that serializes
//! load/append round trips against a pluggable [BackingStore].
//!
//! Rendering, routing, and real persistence backends live outside this
//! crate; authentication is consumed only as the [Session] gate's boolean.

#![warn(missing_docs)]

mod error;

pub mod aggregate;
pub mod backing;
pub mod ledger;
pub mod money;
pub mod range;
pub mod service;
pub mod session;
pub mod transaction;

pub use aggregate::Totals;
pub use backing::{BackingStore, InitialRecords, MemoryBacking};
pub use error::Error;
pub use ledger::{Ledger, LedgerSnapshot};
pub use money::Money;
pub use range::{DateRange, month_of, week_of};
pub use service::LedgerService;
pub use session::Session;
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionKind};
