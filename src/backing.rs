//! The backing store boundary: where ledger contents are fetched from and
//! newly appended transactions are persisted to.
//!
//! The engine only depends on the [BackingStore] contract, so the in-memory
//! mock below can be swapped for a real backend (e.g. a remote
//! spreadsheet-like service) without touching the ledger or aggregation
//! code.

use std::sync::Mutex;

use async_trait::async_trait;
use time::macros::{date, datetime};

use crate::{
    Error,
    money::Money,
    transaction::{Transaction, TransactionKind},
};

/// The initial ledger contents returned by [BackingStore::fetch_initial].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialRecords {
    /// Every order recorded so far, in insertion order.
    pub orders: Vec<Transaction>,
    /// Every payment recorded so far, in insertion order.
    pub payments: Vec<Transaction>,
}

/// Fetches the initial ledger contents and persists appended transactions.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Fetch the transactions recorded so far.
    ///
    /// Called once, after the session gate reports a signed-in user.
    ///
    /// # Errors
    /// Returns [Error::Fetch] if the records could not be retrieved.
    async fn fetch_initial(&self) -> Result<InitialRecords, Error>;

    /// Durably record a newly appended transaction.
    ///
    /// # Errors
    /// Returns [Error::Persist] if the transaction could not be stored. The
    /// caller rolls the transaction back from the in-memory ledger in that
    /// case.
    async fn persist(&self, transaction: &Transaction) -> Result<(), Error>;
}

/// An in-memory [BackingStore] that resolves immediately.
///
/// Stands in for the future remote store during development and in tests.
#[derive(Debug, Default)]
pub struct MemoryBacking {
    initial: InitialRecords,
    persisted: Mutex<Vec<Transaction>>,
}

impl MemoryBacking {
    /// A backing store with no initial records.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backing store that will serve the given records on the initial
    /// fetch.
    pub fn with_initial(initial: InitialRecords) -> Self {
        Self {
            initial,
            persisted: Mutex::new(Vec::new()),
        }
    }

    /// A backing store seeded with the demo fixture: three orders over the
    /// first three days of January 2025 and three payments on the 1st, 2nd
    /// and 4th.
    pub fn with_sample_data() -> Self {
        let order = |id, date, created_at, description: &str, amount| Transaction {
            id,
            kind: TransactionKind::Order,
            date,
            created_at,
            description: description.to_owned(),
            amount: Money::from_f64(amount).expect("sample amounts are positive"),
        };
        let payment = |id, date, created_at, description: &str, amount| Transaction {
            id,
            kind: TransactionKind::Payment,
            date,
            created_at,
            description: description.to_owned(),
            amount: Money::from_f64(amount).expect("sample amounts are positive"),
        };

        Self::with_initial(InitialRecords {
            orders: vec![
                order(
                    1,
                    date!(2025 - 01 - 01),
                    datetime!(2025 - 01 - 01 12:00:00 UTC),
                    "Product A",
                    120.0,
                ),
                order(
                    2,
                    date!(2025 - 01 - 02),
                    datetime!(2025 - 01 - 02 14:30:00 UTC),
                    "Product B",
                    95.0,
                ),
                order(
                    3,
                    date!(2025 - 01 - 03),
                    datetime!(2025 - 01 - 03 09:15:00 UTC),
                    "Product C",
                    200.0,
                ),
            ],
            payments: vec![
                payment(
                    1,
                    date!(2025 - 01 - 01),
                    datetime!(2025 - 01 - 01 13:00:00 UTC),
                    "Payment A",
                    50.0,
                ),
                payment(
                    2,
                    date!(2025 - 01 - 02),
                    datetime!(2025 - 01 - 02 15:30:00 UTC),
                    "Payment B",
                    120.0,
                ),
                payment(
                    3,
                    date!(2025 - 01 - 04),
                    datetime!(2025 - 01 - 04 10:45:00 UTC),
                    "Payment C",
                    75.0,
                ),
            ],
        })
    }

    /// The transactions persisted so far, in the order they arrived.
    pub fn persisted(&self) -> Vec<Transaction> {
        self.persisted
            .lock()
            .expect("persisted log lock should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl BackingStore for MemoryBacking {
    async fn fetch_initial(&self) -> Result<InitialRecords, Error> {
        Ok(self.initial.clone())
    }

    async fn persist(&self, transaction: &Transaction) -> Result<(), Error> {
        self.persisted
            .lock()
            .expect("persisted log lock should not be poisoned")
            .push(transaction.clone());

        Ok(())
    }
}
