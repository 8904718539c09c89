pub mod file;
pub mod memory;
pub mod store;

pub use file::FileWatchlistStore;
pub use memory::MemoryWatchlistStore;
pub use store::{AddOutcome, RemoveOutcome, Watchlist, WatchlistStore};
