//! The ledger store: the single owner of all transaction records.
//!
//! The ledger is the only component permitted to mint transaction IDs and
//! creation timestamps. Consumers read it through point-in-time snapshots
//! and mutate it only by appending.

use time::OffsetDateTime;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionKind},
};

/// Owns the order and payment collections.
///
/// An unloaded ledger behaves exactly like an empty one, so read paths need
/// no guarding before the initial load completes.
#[derive(Debug, Default)]
pub struct Ledger {
    orders: Vec<Transaction>,
    payments: Vec<Transaction>,
    last_order_id: TransactionId,
    last_payment_id: TransactionId,
    last_timestamp: Option<OffsetDateTime>,
}

/// A point-in-time copy of the ledger's contents.
///
/// Both sequences preserve insertion order, most recent last. A snapshot does
/// not track later mutations; take a fresh one per logical read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    /// Every recorded order, in insertion order.
    pub orders: Vec<Transaction>,
    /// Every recorded payment, in insertion order.
    pub payments: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger. IDs for both kinds start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated transaction, assigning it a fresh ID and the
    /// current timestamp, and return the stored record.
    pub fn append(&mut self, new: NewTransaction) -> Transaction {
        let transaction = self.mint(new);
        self.insert(transaction.clone());
        transaction
    }

    /// Build the stored form of `new` with a fresh ID and timestamp, without
    /// inserting it.
    ///
    /// Used by the service layer to persist a record before committing it to
    /// the in-memory collections, so an abandoned or failed persist leaves no
    /// trace here. The ID is consumed either way; IDs are never reused.
    pub(crate) fn mint(&mut self, new: NewTransaction) -> Transaction {
        Transaction {
            id: self.mint_id(new.kind),
            kind: new.kind,
            date: new.date,
            created_at: self.mint_timestamp(),
            description: new.description,
            amount: new.amount,
        }
    }

    /// Insert a record previously produced by [Ledger::mint].
    pub(crate) fn insert(&mut self, transaction: Transaction) {
        self.collection_mut(transaction.kind).push(transaction);
    }

    /// A point-in-time copy of both collections.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            orders: self.orders.clone(),
            payments: self.payments.clone(),
        }
    }

    /// Replace the ledger's contents wholesale with externally sourced
    /// records.
    ///
    /// Used once, immediately after a successful initial fetch from the
    /// backing store. Records are re-validated even though the source should
    /// have produced valid data; on any failure the ledger is left untouched.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription], [Error::DuplicateId] or
    /// [Error::MismatchedKind] if any supplied record violates the data model
    /// invariants.
    pub fn load(
        &mut self,
        orders: Vec<Transaction>,
        payments: Vec<Transaction>,
    ) -> Result<(), Error> {
        validate_records(&orders, TransactionKind::Order)?;
        validate_records(&payments, TransactionKind::Payment)?;

        self.last_order_id = last_id_in(&orders);
        self.last_payment_id = last_id_in(&payments);
        self.last_timestamp = orders
            .iter()
            .chain(payments.iter())
            .map(|transaction| transaction.created_at)
            .max();
        self.orders = orders;
        self.payments = payments;

        Ok(())
    }

    /// The number of records of the given kind.
    pub fn count(&self, kind: TransactionKind) -> usize {
        match kind {
            TransactionKind::Order => self.orders.len(),
            TransactionKind::Payment => self.payments.len(),
        }
    }

    fn collection_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Order => &mut self.orders,
            TransactionKind::Payment => &mut self.payments,
        }
    }

    fn mint_id(&mut self, kind: TransactionKind) -> TransactionId {
        let last = match kind {
            TransactionKind::Order => &mut self.last_order_id,
            TransactionKind::Payment => &mut self.last_payment_id,
        };
        *last += 1;
        *last
    }

    /// The current UTC time, clamped so that timestamps never go backwards
    /// even if the system clock does.
    fn mint_timestamp(&mut self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }
}

fn validate_records(records: &[Transaction], expected: TransactionKind) -> Result<(), Error> {
    let mut seen = std::collections::HashSet::new();

    for record in records {
        if record.kind != expected {
            return Err(Error::MismatchedKind {
                expected,
                found: record.kind,
                id: record.id,
            });
        }
        if record.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
        if !seen.insert(record.id) {
            return Err(Error::DuplicateId {
                kind: expected,
                id: record.id,
            });
        }
    }

    Ok(())
}

fn last_id_in(records: &[Transaction]) -> TransactionId {
    records
        .iter()
        .map(|transaction| transaction.id)
        .max()
        .unwrap_or(0)
}
