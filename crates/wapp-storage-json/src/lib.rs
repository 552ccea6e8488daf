//! wapp-storage-json
//!
//! Filesystem-backed implementation of the wallet persistence gateway.
//! The whole wallet collection lives in one JSON document under the fixed
//! store key, mirroring a single key-value entry.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;
use wapp_core::{storage::STORE_KEY, CoreError, WalletStore};
use wapp_domain::Wallet;

const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the wallet collection as `<data_root>/wapp-wallets.json`.
#[derive(Debug, Clone)]
pub struct JsonWalletStore {
    store_path: PathBuf,
}

impl JsonWalletStore {
    /// Creates the data root if needed and points the store at the fixed
    /// entry inside it.
    pub fn new(data_root: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_root)?;
        let store_path = data_root.join(format!("{}.{}", STORE_KEY, STORE_EXTENSION));
        Ok(Self { store_path })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl WalletStore for JsonWalletStore {
    fn load_wallets(&self) -> Result<Vec<Wallet>, CoreError> {
        if !self.store_path.exists() {
            debug!(path = %self.store_path.display(), "no stored wallets");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.store_path)?;
        let wallets: Vec<Wallet> =
            serde_json::from_str(&data).map_err(|err| CoreError::CorruptData(err.to_string()))?;
        debug!(count = wallets.len(), "loaded wallet collection");
        Ok(wallets)
    }

    fn save_wallets(&self, wallets: &[Wallet]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(wallets)
            .map_err(|err| CoreError::CorruptData(err.to_string()))?;
        let tmp = tmp_path(&self.store_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.store_path)?;
        debug!(count = wallets.len(), "saved wallet collection");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
