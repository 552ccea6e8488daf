//! wapp-core
//!
//! Application state and services for the wallet bookkeeping core.
//! Depends on wapp-domain. No terminal I/O, no direct storage backend.

pub mod book;
pub mod error;
pub mod storage;
pub mod wallet_service;

pub use book::WalletBook;
pub use error::CoreError;
pub use storage::WalletStore;
pub use wallet_service::WalletService;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("wapp=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
