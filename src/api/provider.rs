use async_trait::async_trait;

use crate::{
    error::ProviderError,
    models::{Quote, Symbol},
};

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the latest quote. `Ok(None)` means the provider has no data for the symbol.
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Option<Quote>, ProviderError>;

    /// Checks that the provider can be called at all, before any request goes out.
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
