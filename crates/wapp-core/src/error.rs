use std::io;

use thiserror::Error;
use wapp_domain::{CurrencyError, TransactionError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown transaction kind: {0}")]
    UnknownKind(String),
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),
    #[error("No active wallet")]
    NoActiveWallet,
    #[error("Stored wallet data is corrupt: {0}")]
    CorruptData(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<TransactionError> for CoreError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::InvalidAmount(raw) => CoreError::InvalidAmount(raw),
            TransactionError::UnknownKind(tag) => CoreError::UnknownKind(tag),
        }
    }
}

impl From<CurrencyError> for CoreError {
    fn from(err: CurrencyError) -> Self {
        CoreError::InvalidCurrency(err.to_string())
    }
}
