use std::str::FromStr;

use reqwest::Response;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProviderError;

/// Notice fields the provider sends in place of data when throttling or rejecting a call.
const NOTICE_FIELDS: [&str; 3] = ["Note", "Information", "Error Message"];

pub async fn read_json(res: Response) -> Result<Value, ProviderError> {
    let status = res.status();
    if !status.is_success() {
        return Err(ProviderError::BadResponse(format!(
            "Request failed: {}",
            status
        )));
    }

    let text = res.text().await?;

    serde_json::from_str::<Value>(&text)
        .map_err(|e| ProviderError::BadResponse(format!("Malformed JSON payload: {}", e)))
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| ProviderError::BadResponse(format!("{}: {}", error_msg, e))),
        _ => Err(ProviderError::BadResponse(
            "Unexpected API response format: not an object".to_string(),
        )),
    }
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal, ProviderError> {
    Decimal::from_str(field.trim()).map_err(|_| {
        ProviderError::BadResponse(format!("Failed to parse {} '{}'", field_name, field))
    })
}

pub fn provider_notice(data: &Value) -> Option<&str> {
    NOTICE_FIELDS
        .iter()
        .find_map(|field| data.get(field).and_then(Value::as_str))
}
