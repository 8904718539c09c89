use rust_decimal::Decimal;

use crate::models::{FetchOutcome, QuoteFetchResult};

pub const BORDER: &str = "+-------+---------+---------+----------+--------+";
pub const HEADER: &str = "| TICK  |  PRICE  |  CHANGE | % CHANGE |  TIME  |";
const NO_TIME: &str = "--:--";

pub fn header_lines() -> [&'static str; 3] {
    [BORDER, HEADER, BORDER]
}

pub fn render_row(result: &QuoteFetchResult) -> String {
    match result.outcome() {
        FetchOutcome::Success(quote) => format!(
            "| {:<5} | {:>7} | {:>7} | {:>8} | {:>6} |",
            quote.symbol(),
            two_places(quote.price()),
            two_places(quote.change()),
            quote.change_percent(),
            quote.time_of_day(),
        ),
        FetchOutcome::NotFound => placeholder_row(result, "N/A"),
        FetchOutcome::Error(_) => placeholder_row(result, "ERROR"),
    }
}

pub fn render_table(results: &[QuoteFetchResult]) -> String {
    let mut lines: Vec<String> = header_lines().iter().map(|l| l.to_string()).collect();
    lines.extend(results.iter().map(render_row));
    lines.push(BORDER.to_string());
    lines.join("\n")
}

fn placeholder_row(result: &QuoteFetchResult, marker: &str) -> String {
    format!(
        "| {:<5} | {:<7} | {:<7} | {:<8} | {:<6} |",
        result.symbol(),
        marker,
        marker,
        marker,
        NO_TIME
    )
}

fn two_places(value: &Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
