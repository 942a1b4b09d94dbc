//! Criado - OLX wishlist watcher with Messenger notifications.
//!
//! Users message the bot to manage a wishlist of item names. A
//! reconciliation pass scrapes one OLX search results page per item,
//! diffs the candidates against previously seen ads, and messages each
//! user about anything new or cheaper. A static status page summarizes
//! everything currently tracked.
//!
//! # Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`domain`] - Ads, wishlist entries, price parsing, command grammar
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait seams between the core and its adapters
//! - [`adapter`] - SQLite stores, OLX scraper, Messenger client, HTTP surface
//! - [`app`] - Command dispatch, reconciliation, status page
//!
//! # Example
//!
//! ```no_run
//! use criado::adapter::inbound::http::{router, AppState};
//! use criado::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
//! use criado::config::Config;
//!
//! # fn main() -> criado::error::Result<()> {
//! let config = Config::from_env()?;
//! let pool = create_pool(&config.database_url)?;
//! run_migrations(&pool)?;
//! let app = router(AppState::new(config, pool));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
