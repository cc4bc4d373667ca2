//! Pure date-bucketing and aggregation functions over a ledger snapshot.
//!
//! Every view that needs "sum amounts where the date matches" goes through
//! this module, so all consumers agree on bucketing rules. The functions are
//! stateless: the same snapshot and date always produce the same result.

use rust_decimal::Decimal;
use time::Date;

use crate::{ledger::LedgerSnapshot, range::DateRange, transaction::Transaction};

/// The summed order and payment amounts for a day or a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// The sum of all matching order amounts. Zero when nothing matched.
    pub order_total: Decimal,
    /// The sum of all matching payment amounts. Zero when nothing matched.
    pub payment_total: Decimal,
}

impl Totals {
    /// The running balance under the display convention payments minus
    /// orders. Negative when more is owed than has been received.
    pub fn balance(self) -> Decimal {
        self.payment_total - self.order_total
    }
}

/// Every transaction of either kind dated `date`, most recent first.
///
/// Sorting is by creation timestamp descending; records with equal
/// timestamps come out in reverse insertion order. This governs the display
/// order of a day's transaction list.
pub fn transactions_on(snapshot: &LedgerSnapshot, date: Date) -> Vec<Transaction> {
    let mut matches: Vec<Transaction> = snapshot
        .orders
        .iter()
        .chain(snapshot.payments.iter())
        .filter(|transaction| transaction.date == date)
        .cloned()
        .collect();

    // A stable ascending sort followed by a reversal, so that ties break by
    // insertion order descending.
    matches.sort_by_key(|transaction| transaction.created_at);
    matches.reverse();

    matches
}

/// The order and payment totals for a single calendar day.
pub fn totals_on(snapshot: &LedgerSnapshot, date: Date) -> Totals {
    Totals {
        order_total: sum_on(&snapshot.orders, date),
        payment_total: sum_on(&snapshot.payments, date),
    }
}

/// The order and payment totals over a date range, inclusive on both ends.
///
/// The range has already been validated by [DateRange::new], so this never
/// fails; an empty range of matches simply yields zero totals.
pub fn totals_in(snapshot: &LedgerSnapshot, range: DateRange) -> Totals {
    Totals {
        order_total: sum_in(&snapshot.orders, range),
        payment_total: sum_in(&snapshot.payments, range),
    }
}

fn sum_on(transactions: &[Transaction], date: Date) -> Decimal {
    transactions
        .iter()
        .filter(|transaction| transaction.date == date)
        .map(|transaction| transaction.amount.value())
        .sum()
}

fn sum_in(transactions: &[Transaction], range: DateRange) -> Decimal {
    transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date))
        .map(|transaction| transaction.amount.value())
        .sum()
}
