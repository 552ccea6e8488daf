//! wapp-domain
//!
//! Pure domain models (Currency, Transaction, Wallet).
//! No I/O, no storage. Only data types and their invariants.

pub mod currency;
pub mod transaction;
pub mod wallet;

pub use currency::*;
pub use transaction::*;
pub use wallet::*;
