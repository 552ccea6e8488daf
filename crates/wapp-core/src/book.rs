//! Application state: the in-memory wallet collection and active selection.

use tracing::{debug, warn};
use wapp_domain::{Transaction, Wallet};

use crate::{CoreError, WalletStore};

/// Owns the session's wallet collection plus the active-wallet selection.
///
/// Replaces ambient module-level state: every operation goes through this
/// struct, and storage load/save are explicit boundary calls, never side
/// effects of a mutation.
#[derive(Debug, Default)]
pub struct WalletBook {
    wallets: Vec<Wallet>,
    active: Option<usize>,
}

impl WalletBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a book from storage. The active selection is not part
    /// of the persisted state; it is re-derived here as the first wallet,
    /// when any exist.
    pub fn restore(store: &dyn WalletStore) -> Result<Self, CoreError> {
        let wallets = store.load_wallets()?;
        debug!(count = wallets.len(), "restored wallet collection");
        let active = if wallets.is_empty() { None } else { Some(0) };
        Ok(Self { wallets, active })
    }

    /// Like [`WalletBook::restore`], but degrades corrupt stored data to an
    /// empty book with a logged diagnostic instead of failing the session.
    pub fn restore_or_empty(store: &dyn WalletStore) -> Self {
        match Self::restore(store) {
            Ok(book) => book,
            Err(err) => {
                warn!(error = %err, "could not restore wallets, starting empty");
                Self::new()
            }
        }
    }

    /// Writes a full snapshot of the collection to storage.
    ///
    /// The caller decides when to persist; mutations never auto-save.
    pub fn persist(&self, store: &dyn WalletStore) -> Result<(), CoreError> {
        store.save_wallets(&self.wallets)
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Appends a wallet and makes it the active one.
    pub fn add_wallet(&mut self, wallet: Wallet) {
        self.wallets.push(wallet);
        self.active = Some(self.wallets.len() - 1);
    }

    /// Selects the wallet at `index` as active.
    pub fn select(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.wallets.len() {
            return Err(CoreError::WalletNotFound(format!("index {index}")));
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Wallet> {
        self.active.and_then(|idx| self.wallets.get(idx))
    }

    pub fn active_mut(&mut self) -> Option<&mut Wallet> {
        let idx = self.active?;
        self.wallets.get_mut(idx)
    }

    /// Appends a transaction to the active wallet.
    pub fn record(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        let wallet = self.active_mut().ok_or(CoreError::NoActiveWallet)?;
        wallet.add_transaction(transaction);
        Ok(())
    }
}
