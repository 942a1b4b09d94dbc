//! Environment-based configuration.
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file by the binary). The three required variables mirror what the
//! deployment platform provides; a missing one aborts startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default marketplace search endpoint.
const DEFAULT_OLX_BASE_URL: &str = "https://www.olx.pt";

/// Default Messenger Send API endpoint.
const DEFAULT_MESSENGER_API_URL: &str = "https://graph.facebook.com/v2.6/me/messages";

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page access token for the Messenger Send API.
    pub page_access_token: String,
    /// Shared secret for the webhook verification handshake.
    pub verify_token: String,
    /// SQLite database URL (a file path, or `:memory:` for tests).
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Where the rendered status page is written.
    pub status_page_path: PathBuf,
    /// Marketplace base URL; overridable so tests can point at a fixture server.
    pub olx_base_url: String,
    /// Messenger Send API URL; overridable for tests.
    pub messenger_api_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when a required variable is absent
    /// and [`ConfigError::InvalidValue`] when `BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            page_access_token: require("PAGE_ACCESS_TOKEN")?,
            verify_token: require("VERIFY_TOKEN")?,
            database_url: require("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:8000".into())
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    var: "BIND_ADDR",
                    reason: e.to_string(),
                })?,
            status_page_path: optional("STATUS_PAGE_PATH")
                .map_or_else(|| PathBuf::from("status.html"), PathBuf::from),
            olx_base_url: optional("OLX_BASE_URL").unwrap_or_else(|| DEFAULT_OLX_BASE_URL.into()),
            messenger_api_url: optional("MESSENGER_API_URL")
                .unwrap_or_else(|| DEFAULT_MESSENGER_API_URL.into()),
        })
    }
}

fn require(var: &'static str) -> std::result::Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar { var })
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}
