use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    av_dto::AvGlobalQuoteDto,
    provider::QuoteProvider,
    utils::{parse_response_object, provider_notice, read_json},
};
use crate::{
    config::{API_KEY_VAR, Config},
    error::ProviderError,
    models::{Quote, Symbol},
};

/// Alpha Vantage `GLOBAL_QUOTE` client.
#[derive(Clone, Debug)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AlphaVantageClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(*config.request_timeout())
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().clone(),
        })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::Config(format!("{} is not set", API_KEY_VAR)))
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Option<Quote>, ProviderError> {
        let api_key = self.api_key()?;
        let url = format!("{}/query", self.base_url);

        debug!(%symbol, "requesting global quote");
        let res = self
            .client
            .get(&url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol.as_str()),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let data = read_json(res).await?;
        parse_global_quote(symbol, data)
    }

    fn ensure_ready(&self) -> Result<(), ProviderError> {
        self.api_key().map(|_| ())
    }
}

/// Turns a `GLOBAL_QUOTE` response body into a quote, or `None` when it carries no data.
pub fn parse_global_quote(symbol: &Symbol, data: Value) -> Result<Option<Quote>, ProviderError> {
    let global_quote = match data.get("Global Quote") {
        Some(Value::Object(obj)) if !obj.is_empty() => Value::Object(obj.clone()),
        Some(Value::Object(_)) | Some(Value::Null) | None => {
            if let Some(notice) = provider_notice(&data) {
                warn!(%symbol, notice, "provider returned a notice instead of a quote");
            } else {
                debug!(%symbol, "provider has no quote for symbol");
            }
            return Ok(None);
        }
        Some(_) => {
            return Err(ProviderError::BadResponse(
                "'Global Quote' is not an object".to_string(),
            ));
        }
    };

    let dto = parse_response_object::<AvGlobalQuoteDto>(
        global_quote,
        &format!("Incomplete quote for symbol {}", symbol),
    )?;

    if dto.symbol().as_str() != symbol.as_str() {
        debug!(%symbol, echoed = %dto.symbol(), "provider echoed a different symbol");
    }
    debug!(%symbol, trading_day = %dto.latest_trading_day(), "parsed global quote");

    dto.to_quote(Local::now()).map(Some)
}
