#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc, time::Duration};

    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use crate::{
        app::{Command, commands},
        config::Config,
        db::{MemoryWatchlistStore, Watchlist},
        services::{NoopThrottle, QuoteBatchService},
        test::fakes::{FakeProvider, Scripted, symbols},
    };

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn batch(provider: FakeProvider) -> QuoteBatchService {
        QuoteBatchService::new(
            Arc::new(provider),
            Arc::new(NoopThrottle),
            Duration::from_secs(12),
        )
    }

    #[test]
    fn add_reports_added_then_already_present() {
        let watchlist = Watchlist::new(MemoryWatchlistStore::default());
        let mut out = Vec::new();

        commands::add(&watchlist, "aapl", &mut out).unwrap();
        commands::add(&watchlist, "AAPL", &mut out).unwrap();

        assert_eq!(
            output(out),
            "Added AAPL to your watchlist.\nAAPL is already in your watchlist.\n"
        );
        assert_eq!(watchlist.list().unwrap(), symbols(&["AAPL"]));
    }

    #[test]
    fn add_rejects_invalid_symbol() {
        let watchlist = Watchlist::new(MemoryWatchlistStore::default());
        let mut out = Vec::new();

        assert!(commands::add(&watchlist, "  ", &mut out).is_err());
        assert!(watchlist.list().unwrap().is_empty());
    }

    #[test]
    fn remove_reports_not_present() {
        let watchlist = Watchlist::new(MemoryWatchlistStore::new(symbols(&["AAPL"])));
        let mut out = Vec::new();

        commands::remove(&watchlist, "msft", &mut out).unwrap();
        commands::remove(&watchlist, "aapl", &mut out).unwrap();

        assert_eq!(
            output(out),
            "MSFT is not in your watchlist.\nRemoved AAPL from your watchlist.\n"
        );
    }

    #[test]
    fn list_prints_symbols_or_empty_notice() {
        let mut out = Vec::new();
        commands::list(&Watchlist::new(MemoryWatchlistStore::default()), &mut out).unwrap();
        commands::list(
            &Watchlist::new(MemoryWatchlistStore::new(symbols(&["AAPL", "MSFT"]))),
            &mut out,
        )
        .unwrap();

        assert_eq!(
            output(out),
            "Your watchlist is empty.\nYour watchlist:\n- AAPL\n- MSFT\n"
        );
    }

    #[tokio::test]
    async fn show_prints_a_row_per_symbol_even_on_failure() {
        let watchlist =
            Watchlist::new(MemoryWatchlistStore::new(symbols(&["AAPL", "BAD", "ZZZZ"])));
        let provider = FakeProvider::new(&[
            ("AAPL", Scripted::Found(dec!(189.84), dec!(1.23))),
            ("BAD", Scripted::TransportFailure),
        ]);
        let mut out = Vec::new();

        commands::show(&watchlist, &batch(provider), &mut out)
            .await
            .unwrap();

        let printed = output(out);
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("| AAPL  |  189.84 |    1.23 |    0.50% |"));
        assert_eq!(lines[4], "| BAD   | ERROR   | ERROR   | ERROR    | --:--  |");
        assert_eq!(lines[5], "| ZZZZ  | N/A     | N/A     | N/A      | --:--  |");
    }

    #[tokio::test]
    async fn show_on_empty_watchlist_fetches_nothing() {
        let watchlist = Watchlist::new(MemoryWatchlistStore::default());
        let provider = Arc::new(FakeProvider::new(&[]));
        let service =
            QuoteBatchService::new(provider.clone(), Arc::new(NoopThrottle), Duration::ZERO);
        let mut out = Vec::new();

        commands::show(&watchlist, &service, &mut out).await.unwrap();

        assert_eq!(output(out), "Your watchlist is empty.\n");
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn export_writes_file_and_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let watchlist = Watchlist::new(MemoryWatchlistStore::new(symbols(&["AAPL", "ZZZZ"])));
        let provider = FakeProvider::new(&[("AAPL", Scripted::Found(dec!(1.5), dec!(0.1)))]);
        let mut out = Vec::new();

        commands::export(&watchlist, &batch(provider), &path, &mut out)
            .await
            .unwrap();

        assert_eq!(
            output(out),
            format!("Exported tracked data to {}.\n", path.display())
        );
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn export_without_quotes_reports_no_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let watchlist = Watchlist::new(MemoryWatchlistStore::new(symbols(&["ZZZZ"])));
        let mut out = Vec::new();

        commands::export(&watchlist, &batch(FakeProvider::new(&[])), &path, &mut out)
            .await
            .unwrap();

        assert_eq!(output(out), "No data to export.\n");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn run_uses_watchlist_file_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("watchlist.txt");
        let config = Config::default()
            .with_api_key("demo")
            .with_watchlist_path(&path);
        let mut out = Vec::new();

        commands::run(Command::Add { symbol: "nvda".to_string() }, &config, &mut out)
            .await
            .unwrap();
        commands::run(Command::List, &config, &mut out).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NVDA\n");
        assert_eq!(
            output(out),
            "Added NVDA to your watchlist.\nYour watchlist:\n- NVDA\n"
        );
    }

    #[test]
    fn only_serve_runs_without_api_key() {
        assert!(Command::List.requires_api_key());
        assert!(Command::Show.requires_api_key());
        assert!(!Command::Serve { listen: None }.requires_api_key());
        assert_eq!(Command::Serve { listen: None }.default_log_level(), "info");
    }
}
