use std::sync::Mutex;

use strum_macros::Display;
use tracing::{debug, info};

use crate::{error::StorageError, models::Symbol};

/// Backing storage for the watchlist.
///
/// Implementations only know how to read and overwrite the whole list; the
/// add/remove logic lives in [`Watchlist`].
pub trait WatchlistStore: Send + Sync {
    fn load(&self) -> Result<Vec<Symbol>, StorageError>;
    fn save(&self, symbols: &[Symbol]) -> Result<(), StorageError>;
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AddOutcome {
    #[strum(serialize = "added")]
    Added,
    #[strum(serialize = "already present")]
    AlreadyPresent,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum RemoveOutcome {
    #[strum(serialize = "removed")]
    Removed,
    #[strum(serialize = "not present")]
    NotPresent,
}

pub struct Watchlist {
    store: Box<dyn WatchlistStore>,
    // Serializes load-mutate-save so concurrent callers cannot lose updates.
    write_lock: Mutex<()>,
}

impl Watchlist {
    pub fn new(store: impl WatchlistStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            write_lock: Mutex::new(()),
        }
    }

    pub fn list(&self) -> Result<Vec<Symbol>, StorageError> {
        self.store.load()
    }

    pub fn add(&self, symbol: &Symbol) -> Result<AddOutcome, StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut symbols = self.store.load()?;
        if symbols.contains(symbol) {
            debug!(%symbol, "symbol already in watchlist");
            return Ok(AddOutcome::AlreadyPresent);
        }

        symbols.push(symbol.clone());
        self.store.save(&symbols)?;
        info!(%symbol, total = symbols.len(), "added symbol to watchlist");

        Ok(AddOutcome::Added)
    }

    pub fn remove(&self, symbol: &Symbol) -> Result<RemoveOutcome, StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut symbols = self.store.load()?;
        let Some(index) = symbols.iter().position(|s| s == symbol) else {
            debug!(%symbol, "symbol not in watchlist");
            return Ok(RemoveOutcome::NotPresent);
        };

        symbols.remove(index);
        self.store.save(&symbols)?;
        info!(%symbol, total = symbols.len(), "removed symbol from watchlist");

        Ok(RemoveOutcome::Removed)
    }
}
