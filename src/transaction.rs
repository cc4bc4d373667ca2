//! Defines the core transaction record and its identifying types.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, money::Money};

/// Alias for the integer type used for transaction IDs.
///
/// IDs are unique within each kind's collection; an order and a payment may
/// share an ID value without conflict since they are stored separately.
pub type TransactionId = i64;

/// Whether a transaction records money owed (an order) or money received (a
/// payment).
///
/// The two kinds are stored symmetrically; the sign convention for balances
/// (payments minus orders) is applied at display time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A recorded liability or expense, i.e. money owed.
    Order,
    /// A recorded receipt, i.e. money received.
    Payment,
}

impl TransactionKind {
    /// The capitalised label shown next to a transaction in lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Payment => "Payment",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Payment => write!(f, "payment"),
        }
    }
}

/// A single recorded order or payment.
///
/// Transactions are immutable once created: there is no update operation,
/// only append. To create one, pass a [NewTransaction] to the ledger, which
/// assigns the ID and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, assigned by the ledger at insert time and
    /// never reused.
    pub id: TransactionId,
    /// Whether this is an order or a payment.
    pub kind: TransactionKind,
    /// The calendar day the transaction belongs to.
    ///
    /// This is the bucketing key. Two transactions with the same date share a
    /// bucket regardless of their creation timestamps.
    pub date: Date,
    /// When the record was created, assigned by the ledger at insert time.
    ///
    /// Used only for ordering within a day's bucket, never for bucketing.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money owed or received.
    pub amount: Money,
}

/// The caller-supplied fields of a transaction, before the ledger assigns
/// identity and a creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether to record an order or a payment.
    pub kind: TransactionKind,
    /// The calendar day the transaction belongs to.
    pub date: Date,
    /// A text description of what the transaction is for.
    pub description: String,
    /// The amount of money owed or received.
    pub amount: Money,
}

impl NewTransaction {
    /// Create a validated set of transaction fields.
    ///
    /// The amount has already been validated by [Money]'s constructors, so
    /// the only check left is the description.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] if `description` is empty or
    /// whitespace-only.
    pub fn new(
        kind: TransactionKind,
        date: Date,
        description: &str,
        amount: Money,
    ) -> Result<Self, Error> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self {
            kind,
            date,
            description: description.to_owned(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::{
        Error,
        money::Money,
        transaction::{NewTransaction, Transaction, TransactionKind},
    };

    #[test]
    fn new_transaction_keeps_fields() {
        let amount = Money::from_f64(120.0).unwrap();

        let new = NewTransaction::new(
            TransactionKind::Order,
            date!(2025 - 01 - 01),
            "Product A",
            amount,
        )
        .expect("fields should be valid");

        assert_eq!(new.kind, TransactionKind::Order);
        assert_eq!(new.date, date!(2025 - 01 - 01));
        assert_eq!(new.description, "Product A");
        assert_eq!(new.amount, amount);
    }

    #[test]
    fn new_transaction_rejects_empty_description() {
        let amount = Money::from_f64(120.0).unwrap();

        let result =
            NewTransaction::new(TransactionKind::Order, date!(2025 - 01 - 01), "", amount);

        assert_eq!(result, Err(Error::EmptyDescription));
    }

    #[test]
    fn new_transaction_rejects_whitespace_description() {
        let amount = Money::from_f64(120.0).unwrap();

        let result =
            NewTransaction::new(TransactionKind::Payment, date!(2025 - 01 - 01), "   ", amount);

        assert_eq!(result, Err(Error::EmptyDescription));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(TransactionKind::Order.label(), "Order");
        assert_eq!(TransactionKind::Payment.label(), "Payment");
        assert_eq!(TransactionKind::Order.to_string(), "order");
        assert_eq!(TransactionKind::Payment.to_string(), "payment");
    }

    #[test]
    fn serializes_to_the_backing_record_shape() {
        let transaction = Transaction {
            id: 1,
            kind: TransactionKind::Order,
            date: date!(2025 - 01 - 01),
            created_at: datetime!(2025 - 01 - 01 12:00:00 UTC),
            description: "Product A".to_owned(),
            amount: Money::from_f64(120.0).unwrap(),
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "kind": "order",
                "date": "2025-01-01",
                "createdAt": "2025-01-01T12:00:00Z",
                "description": "Product A",
                "amount": "120",
            })
        );
    }

    #[test]
    fn round_trips_through_json() {
        let transaction = Transaction {
            id: 3,
            kind: TransactionKind::Payment,
            date: date!(2025 - 01 - 04),
            created_at: datetime!(2025 - 01 - 04 10:45:00 UTC),
            description: "Payment C".to_owned(),
            amount: Money::from_f64(75.0).unwrap(),
        };

        let json = serde_json::to_string(&transaction).unwrap();
        let got: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(got, transaction);
    }

    #[test]
    fn deserialization_rejects_non_positive_amount() {
        let json = serde_json::json!({
            "id": 1,
            "kind": "order",
            "date": "2025-01-01",
            "createdAt": "2025-01-01T12:00:00Z",
            "description": "Product A",
            "amount": "0",
        });

        let result: Result<Transaction, _> = serde_json::from_value(json);

        assert!(result.is_err());
    }
}
