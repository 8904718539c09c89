use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    symbol: String,
    price: Decimal,
    change: Decimal,
    change_percent: String,
    #[serde(rename = "time", serialize_with = "serialize_time_of_day")]
    retrieved_at: DateTime<Local>,
}

impl Quote {
    pub fn time_of_day(&self) -> String {
        self.retrieved_at.format(TIME_FORMAT).to_string()
    }
}

fn serialize_time_of_day<S>(value: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(TIME_FORMAT))
}
