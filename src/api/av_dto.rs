use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::utils::parse_decimal;
use crate::{error::ProviderError, models::Quote};

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvGlobalQuoteDto {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "07. latest trading day", default)]
    latest_trading_day: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

impl AvGlobalQuoteDto {
    pub fn to_quote(&self, retrieved_at: DateTime<Local>) -> Result<Quote, ProviderError> {
        let price = parse_decimal(&self.price, "price")?;
        if price < Decimal::ZERO {
            return Err(ProviderError::BadResponse(format!(
                "Negative price for {}: {}",
                self.symbol.trim(),
                price
            )));
        }

        Ok(Quote::new(
            self.symbol.trim().to_string(),
            price,
            parse_decimal(&self.change, "change")?,
            self.change_percent.trim().to_string(),
            retrieved_at,
        ))
    }
}
