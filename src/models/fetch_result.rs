use derive_getters::Getters;
use derive_new::new;
use strum_macros::IntoStaticStr;

use super::{Quote, Symbol};
use crate::error::ProviderError;

/// Outcome of fetching a single symbol as part of a batch.
#[derive(Debug, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FetchOutcome {
    Success(Quote),
    NotFound,
    Error(ProviderError),
}

#[derive(Debug, Getters, new)]
pub struct QuoteFetchResult {
    symbol: Symbol,
    outcome: FetchOutcome,
}

impl QuoteFetchResult {
    pub fn quote(&self) -> Option<&Quote> {
        match &self.outcome {
            FetchOutcome::Success(quote) => Some(quote),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Success(_))
    }

    pub fn label(&self) -> &'static str {
        (&self.outcome).into()
    }
}
