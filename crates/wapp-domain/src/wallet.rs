//! Wallet aggregate: a base balance plus an append-only transaction log.

use serde::{Deserialize, Serialize};

use crate::{Currency, Transaction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A named container of a base balance plus an ordered, append-only log of
/// transactions, denominated in one currency.
///
/// The transaction sequence is insertion order, not date order; display and
/// balance computation both rely on that, even when entry dates are out of
/// order.
pub struct Wallet {
    pub name: String,
    pub description: String,
    pub currency: Currency,
    /// Starting balance before any transactions are applied.
    pub balance: f64,
    pub transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        currency: Currency,
        balance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            currency,
            balance,
            transactions: Vec::new(),
        }
    }

    /// Current balance: base balance plus the signed sum of every recorded
    /// transaction. Recomputed on each call; a personal ledger stays small
    /// enough that the linear walk is fine.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(self.balance, |acc, txn| acc + txn.signed_amount())
    }

    /// Balance rendered with the currency sign, e.g. `"$ 710.00"`.
    pub fn display_balance(&self) -> String {
        format!("{} {:.2}", self.currency.sign, self.balance())
    }

    /// Appends a transaction to the log. Transactions are never removed or
    /// mutated afterwards.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{Transaction, TransactionKind};

    fn sample_wallet() -> Wallet {
        let mut wallet = Wallet::new("Allan's Wallet", "Day to day", Currency::usd(), 1000.0);
        wallet.add_transaction(
            Transaction::new(TransactionKind::Expense, 325.21, "Bought Nike sneakers")
                .unwrap()
                .with_tags(vec!["shoes".into(), "sports".into()]),
        );
        wallet.add_transaction(Transaction::new(TransactionKind::Income, 35.21, "Refund").unwrap());
        wallet
    }

    #[test]
    fn balance_sums_base_and_signed_amounts() {
        let wallet = sample_wallet();
        assert!((wallet.balance() - 710.0).abs() < 1e-9);
    }

    #[test]
    fn display_balance_uses_the_currency_sign() {
        let wallet = sample_wallet();
        assert_eq!(wallet.display_balance(), "$ 710.00");
    }

    #[test]
    fn empty_wallet_balance_is_the_base_balance() {
        let wallet = Wallet::new("Savings", "", Currency::iqd(), 250.0);
        assert_eq!(wallet.balance(), 250.0);
    }

    #[test]
    fn transactions_keep_insertion_order_not_date_order() {
        let mut wallet = Wallet::new("Out of order", "", Currency::usd(), 0.0);
        let newer = Transaction::new(TransactionKind::Income, 1.0, "newer")
            .unwrap()
            .with_date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let older = Transaction::new(TransactionKind::Income, 2.0, "older")
            .unwrap()
            .with_date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        wallet.add_transaction(newer);
        wallet.add_transaction(older);
        let notes: Vec<_> = wallet.transactions.iter().map(|t| t.note.as_str()).collect();
        assert_eq!(notes, ["newer", "older"]);
    }

    #[test]
    fn serde_round_trip_preserves_sequence_and_variants() {
        let wallet = sample_wallet();
        let json = serde_json::to_string(&wallet).unwrap();
        let back: Wallet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wallet);
        assert_eq!(back.transactions[0].kind, TransactionKind::Expense);
        assert_eq!(back.transactions[1].kind, TransactionKind::Income);
        assert!((back.balance() - wallet.balance()).abs() < 1e-9);
    }
}
