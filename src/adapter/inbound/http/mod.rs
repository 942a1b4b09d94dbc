//! HTTP surface for the bot.
//!
//! # Route Structure
//!
//! ```text
//! GET  /           - Status page with currently tracked ads
//! GET  /update     - Trigger one reconciliation pass
//! GET  /messenger  - Webhook verification handshake
//! POST /messenger  - Receive chat events
//! ```

pub mod pages;
pub mod state;
pub mod webhook;

use axum::routing::get;
use axum::Router;

pub use state::AppState;

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/update", get(pages::update))
        .route("/messenger", get(webhook::verify).post(webhook::receive))
        .with_state(state)
}
