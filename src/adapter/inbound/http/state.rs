//! Application state shared across handlers.

use std::sync::Arc;

use crate::adapter::outbound::messenger::MessengerClient;
use crate::adapter::outbound::olx::OlxClient;
use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::store::{SqliteAdStore, SqliteWishlistStore};
use crate::app::status_page::StatusPage;
use crate::config::Config;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; carries the stores, the marketplace and
/// notifier clients, and the status page writer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    wishlist: SqliteWishlistStore,
    ads: SqliteAdStore,
    marketplace: OlxClient,
    notifier: MessengerClient,
    status_page: StatusPage,
}

impl AppState {
    /// Wire up state from configuration and a ready database pool.
    #[must_use]
    pub fn new(config: Config, pool: DbPool) -> Self {
        let http = reqwest::Client::new();
        let marketplace = OlxClient::new(http.clone(), config.olx_base_url.clone());
        let notifier = MessengerClient::new(
            http,
            config.messenger_api_url.clone(),
            config.page_access_token.clone(),
        );
        let status_page = StatusPage::new(config.status_page_path.clone());

        Self {
            inner: Arc::new(AppStateInner {
                wishlist: SqliteWishlistStore::new(pool.clone()),
                ads: SqliteAdStore::new(pool),
                marketplace,
                notifier,
                status_page,
                config,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    #[must_use]
    pub fn wishlist(&self) -> &SqliteWishlistStore {
        &self.inner.wishlist
    }

    #[must_use]
    pub fn ads(&self) -> &SqliteAdStore {
        &self.inner.ads
    }

    #[must_use]
    pub fn marketplace(&self) -> &OlxClient {
        &self.inner.marketplace
    }

    #[must_use]
    pub fn notifier(&self) -> &MessengerClient {
        &self.inner.notifier
    }

    #[must_use]
    pub fn status_page(&self) -> &StatusPage {
        &self.inner.status_page
    }
}
