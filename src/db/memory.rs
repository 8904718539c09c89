use std::sync::Mutex;

use super::store::WatchlistStore;
use crate::{error::StorageError, models::Symbol};

#[derive(Debug, Default)]
pub struct MemoryWatchlistStore {
    symbols: Mutex<Vec<Symbol>>,
}

impl MemoryWatchlistStore {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols: Mutex::new(symbols),
        }
    }
}

impl WatchlistStore for MemoryWatchlistStore {
    fn load(&self) -> Result<Vec<Symbol>, StorageError> {
        Ok(self.symbols.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, symbols: &[Symbol]) -> Result<(), StorageError> {
        *self.symbols.lock().unwrap_or_else(|e| e.into_inner()) = symbols.to_vec();
        Ok(())
    }
}
