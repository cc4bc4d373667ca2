//! Serialized access to the ledger and its backing store.
//!
//! The ledger has a single logical owner. All loads and appends go through
//! one async mutex so that two in-flight appends can never each read a stale
//! snapshot and lose an update, and reads always see either all or none of
//! an append.

use std::sync::Arc;

use time::Date;
use tokio::sync::Mutex;

use crate::{
    Error,
    aggregate::{self, Totals},
    backing::BackingStore,
    ledger::{Ledger, LedgerSnapshot},
    money::Money,
    range::{self, DateRange},
    transaction::{NewTransaction, Transaction, TransactionKind},
};

/// Coordinates the in-memory ledger with its backing store and exposes the
/// read operations the view layers consume.
pub struct LedgerService {
    ledger: Mutex<Ledger>,
    backing: Arc<dyn BackingStore>,
}

impl LedgerService {
    /// A service over an empty, unloaded ledger.
    ///
    /// Reads against the unloaded ledger return empty results rather than
    /// failing, so consumers need no guarding before [Self::load_initial]
    /// completes.
    pub fn new(backing: Arc<dyn BackingStore>) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            backing,
        }
    }

    /// Fetch the initial records from the backing store and load them into
    /// the ledger, replacing its contents wholesale.
    ///
    /// Called once after the session gate reports a signed-in user.
    ///
    /// # Errors
    /// Returns [Error::Fetch] if the backing store could not be reached; the
    /// ledger is left unloaded (reads see an empty store) and the caller may
    /// retry. Validation errors from the fetched records propagate as-is.
    pub async fn load_initial(&self) -> Result<(), Error> {
        // Taking the lock before fetching serializes the load against any
        // in-flight append.
        let mut ledger = self.ledger.lock().await;

        let records = self.backing.fetch_initial().await.inspect_err(|error| {
            tracing::error!("failed to fetch initial records: {error}");
        })?;

        let (order_count, payment_count) = (records.orders.len(), records.payments.len());
        ledger.load(records.orders, records.payments)?;
        tracing::info!(orders = order_count, payments = payment_count, "loaded initial records");

        Ok(())
    }

    /// Validate, persist, and record a new transaction, returning the stored
    /// record.
    ///
    /// The record is committed to the in-memory ledger only after the
    /// backing store accepts it, so the ledger never diverges from durable
    /// storage: a failed or abandoned append leaves no trace. No automatic
    /// retry is performed.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] if `description` is empty or
    /// whitespace-only (the amount was already validated when the [Money]
    /// value was constructed), or [Error::Persist] if the backing store
    /// rejected the record.
    pub async fn append(
        &self,
        kind: TransactionKind,
        date: Date,
        description: &str,
        amount: Money,
    ) -> Result<Transaction, Error> {
        let new = NewTransaction::new(kind, date, description, amount)?;

        let mut ledger = self.ledger.lock().await;
        let transaction = ledger.mint(new);

        if let Err(error) = self.backing.persist(&transaction).await {
            tracing::error!(%kind, id = transaction.id, "discarded transaction after failed persist: {error}");
            return Err(error);
        }

        ledger.insert(transaction.clone());
        tracing::info!(%kind, id = transaction.id, %date, %amount, "appended transaction");

        Ok(transaction)
    }

    /// Every transaction on `date`, most recent first.
    pub async fn transactions_on(&self, date: Date) -> Vec<Transaction> {
        aggregate::transactions_on(&self.snapshot().await, date)
    }

    /// The order and payment totals for a single calendar day.
    pub async fn totals_on(&self, date: Date) -> Totals {
        aggregate::totals_on(&self.snapshot().await, date)
    }

    /// The order and payment totals over `start` through `end`, inclusive on
    /// both ends.
    ///
    /// # Errors
    /// Returns [Error::InvalidRange] if `start` is after `end`.
    pub async fn totals_in_range(&self, start: Date, end: Date) -> Result<Totals, Error> {
        let range = DateRange::new(start, end)?;

        Ok(aggregate::totals_in(&self.snapshot().await, range))
    }

    /// The totals for the Monday-through-Sunday week containing `date`.
    pub async fn totals_for_week(&self, date: Date) -> Totals {
        aggregate::totals_in(&self.snapshot().await, range::week_of(date))
    }

    /// The totals for the calendar month containing `date`.
    pub async fn totals_for_month(&self, date: Date) -> Totals {
        aggregate::totals_in(&self.snapshot().await, range::month_of(date))
    }

    /// A fresh point-in-time copy of the ledger contents.
    pub async fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.lock().await.snapshot()
    }
}
