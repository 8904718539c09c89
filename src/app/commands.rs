use std::{io::Write, path::Path, sync::Arc};

use anyhow::{Context, Result};

use super::{
    cli::Command,
    export::{ExportSummary, export_csv},
    table,
};
use crate::{
    api::AlphaVantageClient,
    config::Config,
    db::{AddOutcome, FileWatchlistStore, RemoveOutcome, Watchlist},
    models::Symbol,
    services::{QuoteBatchService, TokioThrottle},
};

/// Runs one batch command against the watchlist file and provider named in `config`.
pub async fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let watchlist = Watchlist::new(FileWatchlistStore::new(config.watchlist_path()));

    match command {
        Command::Add { symbol } => add(&watchlist, &symbol, out),
        Command::Remove { symbol } => remove(&watchlist, &symbol, out),
        Command::List => list(&watchlist, out),
        Command::Show => show(&watchlist, &batch_service(config)?, out).await,
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| config.export_path().clone());
            export(&watchlist, &batch_service(config)?, &path, out).await
        }
        Command::Serve { .. } => Err(anyhow::anyhow!("serve is not a batch command")),
    }
}

fn batch_service(config: &Config) -> Result<QuoteBatchService> {
    let client = AlphaVantageClient::new(config).context("Failed to set up quote client")?;
    Ok(QuoteBatchService::new(
        Arc::new(client),
        Arc::new(TokioThrottle),
        *config.request_delay(),
    ))
}

pub fn add(watchlist: &Watchlist, raw: &str, out: &mut impl Write) -> Result<()> {
    let symbol = Symbol::parse(raw).with_context(|| format!("Cannot add '{}'", raw))?;

    match watchlist.add(&symbol)? {
        AddOutcome::Added => writeln!(out, "Added {} to your watchlist.", symbol)?,
        AddOutcome::AlreadyPresent => writeln!(out, "{} is already in your watchlist.", symbol)?,
    }

    Ok(())
}

pub fn remove(watchlist: &Watchlist, raw: &str, out: &mut impl Write) -> Result<()> {
    let symbol = Symbol::parse(raw).with_context(|| format!("Cannot remove '{}'", raw))?;

    match watchlist.remove(&symbol)? {
        RemoveOutcome::Removed => writeln!(out, "Removed {} from your watchlist.", symbol)?,
        RemoveOutcome::NotPresent => writeln!(out, "{} is not in your watchlist.", symbol)?,
    }

    Ok(())
}

pub fn list(watchlist: &Watchlist, out: &mut impl Write) -> Result<()> {
    let symbols = watchlist.list()?;

    if symbols.is_empty() {
        writeln!(out, "Your watchlist is empty.")?;
        return Ok(());
    }

    writeln!(out, "Your watchlist:")?;
    for symbol in &symbols {
        writeln!(out, "- {}", symbol)?;
    }

    Ok(())
}

/// Prints the quote table, one row at a time as quotes arrive.
pub async fn show(
    watchlist: &Watchlist,
    batch: &QuoteBatchService,
    out: &mut impl Write,
) -> Result<()> {
    let symbols = watchlist.list()?;

    if symbols.is_empty() {
        writeln!(out, "Your watchlist is empty.")?;
        return Ok(());
    }

    for line in table::header_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    let mut write_result = Ok(());
    batch
        .fetch_all_with_progress(&symbols, |result| {
            if write_result.is_ok() {
                write_result =
                    writeln!(out, "{}", table::render_row(result)).and_then(|_| out.flush());
            }
        })
        .await
        .context("Failed to fetch quotes")?;
    write_result?;

    writeln!(out, "{}", table::BORDER)?;

    Ok(())
}

pub async fn export(
    watchlist: &Watchlist,
    batch: &QuoteBatchService,
    path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let symbols = watchlist.list()?;

    if symbols.is_empty() {
        writeln!(out, "Your watchlist is empty.")?;
        return Ok(());
    }

    let results = batch
        .fetch_all(&symbols)
        .await
        .context("Failed to fetch quotes")?;

    match export_csv(&results, path)? {
        ExportSummary::Written { path, .. } => {
            writeln!(out, "Exported tracked data to {}.", path.display())?
        }
        ExportSummary::NothingToExport => writeln!(out, "No data to export.")?,
    }

    Ok(())
}
