//! Shared test fixtures: file-backed databases, a canned marketplace, and
//! a recording notifier.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use parking_lot::Mutex;

use criado::adapter::inbound::http::AppState;
use criado::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use criado::config::Config;
use criado::domain::{Listing, UserId};
use criado::error::Result;
use criado::port::outbound::marketplace::Marketplace;
use criado::port::outbound::notifier::Notifier;

/// Configuration pointing every outbound endpoint at an unreachable port,
/// so a test that accidentally goes to the network fails fast.
pub fn test_config(dir: &Path) -> Config {
    Config {
        page_access_token: "test-token".into(),
        verify_token: "shared-secret".into(),
        database_url: dir.join("criado.db").to_string_lossy().into_owned(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        status_page_path: dir.join("status.html"),
        olx_base_url: "http://127.0.0.1:1".into(),
        messenger_api_url: "http://127.0.0.1:1".into(),
    }
}

/// A migrated file-backed pool plus the wired application state.
pub fn test_state(dir: &Path) -> (AppState, DbPool) {
    let config = test_config(dir);
    let pool = create_pool(&config.database_url).unwrap();
    run_migrations(&pool).unwrap();
    (AppState::new(config, pool.clone()), pool)
}

/// Marketplace fake serving canned listings per item name.
#[derive(Default)]
pub struct StaticMarket {
    pages: Mutex<HashMap<String, Vec<Listing>>>,
}

impl StaticMarket {
    pub fn set(&self, item: &str, listings: Vec<Listing>) {
        self.pages.lock().insert(item.to_string(), listings);
    }
}

impl Marketplace for StaticMarket {
    async fn search(&self, item: &str) -> Result<Vec<Listing>> {
        Ok(self.pages.lock().get(item).cloned().unwrap_or_default())
    }
}

/// Notifier fake that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(UserId, String)>>,
}

impl RecordingNotifier {
    pub fn messages_for(&self, user: &str) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(recipient, _)| recipient.as_str() == user)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &UserId, text: &str) -> Result<()> {
        self.sent
            .lock()
            .push((recipient.clone(), text.to_string()));
        Ok(())
    }
}
