#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::table::{BORDER, HEADER, render_row, render_table},
        error::ProviderError,
        models::{FetchOutcome, QuoteFetchResult},
        test::fakes::{quote, symbol},
    };

    #[test]
    fn success_row_is_right_aligned_with_two_decimals() {
        let q = quote("AAPL", dec!(189.8400), dec!(1.2), "0.6520%");
        let time = q.time_of_day();
        let result = QuoteFetchResult::new(symbol("AAPL"), FetchOutcome::Success(q));

        assert_eq!(
            render_row(&result),
            format!("| AAPL  |  189.84 |    1.20 |  0.6520% | {:>6} |", time)
        );
    }

    #[test]
    fn negative_change_keeps_sign() {
        let q = quote("TSLA", dec!(171.05), dec!(-3.956), "-2.2571%");
        let result = QuoteFetchResult::new(symbol("TSLA"), FetchOutcome::Success(q));

        assert!(render_row(&result).starts_with("| TSLA  |  171.05 |   -3.96 | -2.2571% |"));
    }

    #[test]
    fn not_found_row_uses_placeholders() {
        let result = QuoteFetchResult::new(symbol("ZZZZ"), FetchOutcome::NotFound);

        assert_eq!(
            render_row(&result),
            "| ZZZZ  | N/A     | N/A     | N/A      | --:--  |"
        );
    }

    #[test]
    fn error_row_uses_placeholders() {
        let result = QuoteFetchResult::new(
            symbol("IBM"),
            FetchOutcome::Error(ProviderError::Transport("timed out".to_string())),
        );

        assert_eq!(
            render_row(&result),
            "| IBM   | ERROR   | ERROR   | ERROR    | --:--  |"
        );
    }

    #[test]
    fn rows_share_the_header_width() {
        let result = QuoteFetchResult::new(symbol("ZZZZ"), FetchOutcome::NotFound);

        assert_eq!(render_row(&result).len(), HEADER.len());
        assert_eq!(BORDER.len(), HEADER.len());
    }

    #[test]
    fn table_wraps_rows_in_borders() {
        let results = vec![
            QuoteFetchResult::new(symbol("A"), FetchOutcome::NotFound),
            QuoteFetchResult::new(symbol("B"), FetchOutcome::NotFound),
        ];

        let table = render_table(&results);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[2], BORDER);
        assert!(lines[3].starts_with("| A     |"));
        assert!(lines[4].starts_with("| B     |"));
        assert_eq!(lines[5], BORDER);
    }
}
