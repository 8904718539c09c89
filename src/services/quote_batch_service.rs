use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use super::throttle::Throttle;
use crate::{
    api::QuoteProvider,
    error::ProviderError,
    models::{FetchOutcome, QuoteFetchResult, Symbol},
};

/// Fetches quotes for many symbols one at a time, spaced out to respect the
/// provider's rate limit. A failing symbol is recorded and the batch moves on.
#[derive(Clone)]
pub struct QuoteBatchService {
    provider: Arc<dyn QuoteProvider>,
    throttle: Arc<dyn Throttle>,
    delay: Duration,
}

impl QuoteBatchService {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        throttle: Arc<dyn Throttle>,
        delay: Duration,
    ) -> Self {
        Self {
            provider,
            throttle,
            delay,
        }
    }

    pub async fn fetch_all(
        &self,
        symbols: &[Symbol],
    ) -> Result<Vec<QuoteFetchResult>, ProviderError> {
        self.fetch_all_with_progress(symbols, |_| {}).await
    }

    /// Like [`fetch_all`](Self::fetch_all), handing each result to `on_result`
    /// as soon as it is known.
    pub async fn fetch_all_with_progress<F>(
        &self,
        symbols: &[Symbol],
        mut on_result: F,
    ) -> Result<Vec<QuoteFetchResult>, ProviderError>
    where
        F: FnMut(&QuoteFetchResult),
    {
        self.provider.ensure_ready()?;

        info!(total = symbols.len(), delay_secs = self.delay.as_secs_f64(), "starting batch fetch");

        let mut results = Vec::with_capacity(symbols.len());

        for (idx, symbol) in symbols.iter().enumerate() {
            if idx > 0 {
                debug!(delay_ms = self.delay.as_millis() as u64, "throttling before next request");
                self.throttle.wait(self.delay).await;
            }

            let outcome = match self.provider.fetch_quote(symbol).await {
                Ok(Some(quote)) => FetchOutcome::Success(quote),
                Ok(None) => FetchOutcome::NotFound,
                Err(err) => {
                    warn!(%symbol, error = %err, "quote fetch failed");
                    FetchOutcome::Error(err)
                }
            };

            let result = QuoteFetchResult::new(symbol.clone(), outcome);
            debug!(%symbol, outcome = result.label(), "fetched symbol");

            on_result(&result);
            results.push(result);
        }

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        info!(
            total = results.len(),
            succeeded,
            failed = results.len() - succeeded,
            "completed batch fetch"
        );

        Ok(results)
    }
}
