use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::{FetchOutcome, Quote, QuoteFetchResult};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExportSummary {
    Written { path: PathBuf, rows: usize },
    NothingToExport,
}

/// One CSV row. Decimals are written as their exact text.
#[derive(Serialize)]
struct ExportRecord<'a> {
    symbol: &'a str,
    price: String,
    change: String,
    change_percent: &'a str,
    time: String,
}

impl<'a> From<&'a Quote> for ExportRecord<'a> {
    fn from(quote: &'a Quote) -> Self {
        Self {
            symbol: quote.symbol(),
            price: quote.price().to_string(),
            change: quote.change().to_string(),
            change_percent: quote.change_percent(),
            time: quote.time_of_day(),
        }
    }
}

/// Writes successful quotes as CSV. Symbols without a quote are left out; when
/// nothing is left the file is not touched.
pub fn export_csv(results: &[QuoteFetchResult], path: &Path) -> Result<ExportSummary> {
    let quotes: Vec<&Quote> = results
        .iter()
        .filter_map(|result| match result.outcome() {
            FetchOutcome::Success(quote) => Some(quote),
            FetchOutcome::NotFound => {
                warn!(symbol = %result.symbol(), "no quote data, leaving symbol out of export");
                None
            }
            FetchOutcome::Error(err) => {
                warn!(
                    symbol = %result.symbol(),
                    error = %err,
                    "fetch failed, leaving symbol out of export"
                );
                None
            }
        })
        .collect();

    if quotes.is_empty() {
        info!("no successful quotes, skipping export");
        return Ok(ExportSummary::NothingToExport);
    }

    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create export file at path: {}", path.display()))?;

    for quote in &quotes {
        writer
            .serialize(ExportRecord::from(*quote))
            .with_context(|| format!("Failed to write export row for {}", quote.symbol()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush export file at path: {}", path.display()))?;

    info!(rows = quotes.len(), path = %path.display(), "exported quotes");

    Ok(ExportSummary::Written {
        path: path.to_path_buf(),
        rows: quotes.len(),
    })
}
