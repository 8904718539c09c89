use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::warn;

use super::store::WatchlistStore;
use crate::{error::StorageError, models::Symbol};

/// Watchlist kept in a plain-text file, one uppercase symbol per line.
#[derive(Clone, Debug)]
pub struct FileWatchlistStore {
    path: PathBuf,
}

impl FileWatchlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_err(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl WatchlistStore for FileWatchlistStore {
    fn load(&self) -> Result<Vec<Symbol>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(parse_lines(&contents))
    }

    fn save(&self, symbols: &[Symbol]) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.write_err(e))?;
        for symbol in symbols {
            writeln!(file, "{}", symbol).map_err(|e| self.write_err(e))?;
        }
        file.flush().map_err(|e| self.write_err(e))?;

        // The temp file is created owner-only; carry over the mode of the file it replaces.
        match fs::metadata(&self.path) {
            Ok(existing) => fs::set_permissions(file.path(), existing.permissions())
                .map_err(|e| self.write_err(e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(self.write_err(e)),
        }

        file.persist(&self.path)
            .map_err(|e| self.write_err(e.error))?;

        Ok(())
    }
}

fn parse_lines(contents: &str) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Symbol::parse(line) {
            Ok(symbol) if !symbols.contains(&symbol) => symbols.push(symbol),
            Ok(_) => {}
            Err(err) => {
                warn!(line = line_no + 1, error = %err, "skipping invalid watchlist entry");
            }
        }
    }

    symbols
}
