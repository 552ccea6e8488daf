//! Domain model for recorded monetary movements.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Discriminates the direction of a transaction. The variant alone decides
/// the sign applied to the stored magnitude.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parses the wire discriminator ("income" / "expense").
    pub fn from_tag(tag: &str) -> Result<Self, TransactionError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(TransactionError::UnknownKind(other.to_string())),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single recorded monetary movement. Immutable once appended to a
/// wallet; the core offers no edit or delete operation.
pub struct Transaction {
    pub uid: Uuid,
    pub kind: TransactionKind,
    /// Magnitude only. The sign is a function of `kind`, never baked in.
    pub amount: f64,
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction dated now with no tags.
    ///
    /// The amount must be a finite, non-negative magnitude; anything else
    /// fails instead of letting a non-numeric value reach the balance sum.
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        note: impl Into<String>,
    ) -> Result<Self, TransactionError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TransactionError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            uid: Uuid::new_v4(),
            kind,
            amount,
            note: note.into(),
            tags: Vec::new(),
            date: Utc::now(),
        })
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Returns the amount with the variant's sign applied: positive for
    /// income, negative for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when constructing [`Transaction`] values.
pub enum TransactionError {
    /// The amount was not a finite, non-negative number.
    InvalidAmount(String),
    /// The discriminator tag did not name a known variant.
    UnknownKind(String),
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionError::InvalidAmount(raw) => {
                write!(f, "invalid transaction amount `{raw}`")
            }
            TransactionError::UnknownKind(tag) => {
                write!(f, "unknown transaction kind `{tag}`")
            }
        }
    }
}

impl std::error::Error for TransactionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_keeps_its_magnitude() {
        let txn = Transaction::new(TransactionKind::Income, 35.21, "Refund").unwrap();
        assert_eq!(txn.signed_amount(), 35.21);
    }

    #[test]
    fn expense_negates_its_magnitude() {
        let txn = Transaction::new(TransactionKind::Expense, 325.21, "Sneakers").unwrap();
        assert_eq!(txn.signed_amount(), -325.21);
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let result = Transaction::new(TransactionKind::Income, bad, "");
            assert!(matches!(result, Err(TransactionError::InvalidAmount(_))));
        }
    }

    #[test]
    fn tag_round_trips_through_from_tag() {
        assert_eq!(
            TransactionKind::from_tag("income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::from_tag(" Expense ").unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            TransactionKind::from_tag("transfer"),
            Err(TransactionError::UnknownKind("transfer".into()))
        );
    }

    #[test]
    fn serde_round_trip_preserves_variant_and_fields() {
        let txn = Transaction::new(TransactionKind::Expense, 12.5, "Lunch")
            .unwrap()
            .with_tags(vec!["food".into()]);
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"expense\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn unknown_wire_discriminator_fails_to_deserialize() {
        let json = r#"{
            "uid": "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d",
            "kind": "transfer",
            "amount": 1.0,
            "note": "",
            "tags": [],
            "date": "2020-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
