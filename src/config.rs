use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use derive_getters::Getters;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Runtime settings, read once at startup and handed to each component.
#[derive(Clone, Debug, Getters)]
pub struct Config {
    api_key: Option<String>,
    base_url: String,
    watchlist_path: PathBuf,
    export_path: PathBuf,
    /// Minimum spacing between provider requests. The free tier allows 5 per minute.
    request_delay: Duration,
    request_timeout: Duration,
    listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            watchlist_path: PathBuf::from("watchlist.txt"),
            export_path: PathBuf::from("stocks_export.csv"),
            request_delay: Duration::from_secs(12),
            request_timeout: Duration::from_secs(10),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = lookup("ALPHA_VANTAGE_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let watchlist_path = lookup("WATCHLIST_FILE")
            .map(|path| expand_path(&path))
            .unwrap_or(defaults.watchlist_path);

        let export_path = lookup("EXPORT_FILE")
            .map(|path| expand_path(&path))
            .unwrap_or(defaults.export_path);

        let request_delay = parse_var::<u64>(&lookup, "QUOTE_REQUEST_DELAY_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_delay);

        let request_timeout = parse_var::<u64>(&lookup, "QUOTE_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let listen_addr =
            parse_var::<SocketAddr>(&lookup, "LISTEN_ADDR")?.unwrap_or(defaults.listen_addr);

        Ok(Self {
            api_key,
            base_url,
            watchlist_path,
            export_path,
            request_delay,
            request_timeout,
            listen_addr,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_watchlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.watchlist_path = path.into();
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).into_owned())
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
