//! Application configuration loaded from environment variables.

use domain::{DEMO_ACCOUNTS, Money};
use tracing_subscriber::EnvFilter;

/// An account opened when the server starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSeed {
    pub name: String,
    pub balance: Money,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `ACCOUNTS` — comma-separated `name:balance` seeds
///   (default: `"Artem:1000,Denis:200"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub accounts: Vec<AccountSeed>,
    /// Raw `ACCOUNTS` value that failed to parse and was replaced by the defaults.
    pub rejected_accounts: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let (accounts, rejected_accounts) = match std::env::var("ACCOUNTS") {
            Ok(raw) => match parse_account_seeds(&raw) {
                Some(seeds) => (seeds, None),
                None => (default_accounts(), Some(raw)),
            },
            Err(_) => (default_accounts(), None),
        };

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            accounts,
            rejected_accounts,
        }
    }

    /// Builds the tracing filter from `log_level`, falling back to `info` when
    /// the directive does not parse.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            accounts: default_accounts(),
            rejected_accounts: None,
        }
    }
}

fn default_accounts() -> Vec<AccountSeed> {
    DEMO_ACCOUNTS
        .into_iter()
        .map(|(name, balance)| AccountSeed {
            name: name.to_string(),
            balance: Money::new(balance),
        })
        .collect()
}

/// Parses `name:balance` pairs separated by commas.
///
/// Returns `None` if any entry is malformed.
pub fn parse_account_seeds(raw: &str) -> Option<Vec<AccountSeed>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, balance) = entry.rsplit_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(AccountSeed {
                name: name.to_string(),
                balance: Money::new(balance.trim().parse().ok()?),
            })
        })
        .collect()
}
