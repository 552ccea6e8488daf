use wapp_domain::Wallet;

use crate::CoreError;

/// Fixed application key under which the wallet collection is stored.
pub const STORE_KEY: &str = "wapp-wallets";

/// Abstraction over persistence backends capable of storing the wallet
/// collection as a single snapshot.
///
/// Every save rewrites the whole collection under [`STORE_KEY`]; there is
/// no incremental diff, so no partial-write or merge conflict can occur.
pub trait WalletStore: Send + Sync {
    /// Loads the stored wallet collection. An absent entry yields an empty
    /// vector, not an error; a present but unparsable entry fails with
    /// [`CoreError::CorruptData`].
    fn load_wallets(&self) -> Result<Vec<Wallet>, CoreError>;

    /// Overwrites the stored entry with a full snapshot of `wallets`.
    fn save_wallets(&self, wallets: &[Wallet]) -> Result<(), CoreError>;
}
