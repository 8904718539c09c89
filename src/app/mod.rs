pub mod cli;
pub mod commands;
pub mod export;
pub mod table;

pub use cli::{Cli, Command};
pub use export::{ExportSummary, export_csv};
