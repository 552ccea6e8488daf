//! Validated construction of wallets and transactions from raw form input.

use tracing::debug;
use uuid::Uuid;
use wapp_domain::{Currency, Transaction, TransactionKind, Wallet};

use crate::{CoreError, WalletBook};

/// Parses and validates user-supplied input before it touches the book.
///
/// Construction failures surface synchronously to the caller; nothing is
/// coerced into a sentinel value that could leak into balance arithmetic.
pub struct WalletService;

impl WalletService {
    /// Builds a wallet from raw form fields and appends it to the book,
    /// making it the active wallet.
    pub fn create_wallet(
        book: &mut WalletBook,
        name: &str,
        description: &str,
        currency: Currency,
        raw_balance: &str,
    ) -> Result<(), CoreError> {
        let balance = parse_amount(raw_balance)?;
        let wallet = Wallet::new(name.trim(), description.trim(), currency, balance);
        debug!(name = %wallet.name, "creating wallet");
        book.add_wallet(wallet);
        Ok(())
    }

    /// Builds a user-defined currency from raw form fields. Presets
    /// ([`Currency::usd`], [`Currency::iqd`]) bypass this path.
    pub fn custom_currency(
        name: &str,
        sign: &str,
        raw_exchange_rate: &str,
    ) -> Result<Currency, CoreError> {
        let rate = parse_amount(raw_exchange_rate)?;
        Ok(Currency::new(name.trim(), sign.trim(), rate)?)
    }

    /// Builds a transaction from raw form fields and records it against the
    /// active wallet. Returns the generated transaction id.
    pub fn record_transaction(
        book: &mut WalletBook,
        kind_tag: &str,
        raw_amount: &str,
        note: &str,
        tags: Vec<String>,
    ) -> Result<Uuid, CoreError> {
        let kind = TransactionKind::from_tag(kind_tag)?;
        let amount = parse_amount(raw_amount)?;
        let transaction = Transaction::new(kind, amount, note)?.with_tags(tags);
        let uid = transaction.uid;
        book.record(transaction)?;
        Ok(uid)
    }
}

/// Parses a numeric form field, rejecting anything that is not a finite
/// number instead of letting a NaN propagate into the balance sum.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::InvalidAmount(raw.to_string()))?;
    if !value.is_finite() {
        return Err(CoreError::InvalidAmount(raw.to_string()));
    }
    Ok(value)
}
