//! Status page and update trigger handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::app::reconciler::run_pass;
use crate::app::status_page::StatusPage;

use super::state::AppState;

/// `GET /` - the status page.
///
/// Serves the file the reconciler last wrote; before the first pass there
/// is no file yet, so the page is rendered straight from the store.
pub async fn index(State(state): State<AppState>) -> Response {
    match state.status_page().read() {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => render_live(&state).await,
        Err(error) => {
            error!(%error, "failed to read status page");
            render_live(&state).await
        }
    }
}

async fn render_live(state: &AppState) -> Response {
    use crate::port::outbound::store::AdStore;

    let ads = match state.ads().all().await {
        Ok(ads) => ads,
        Err(error) => {
            error!(%error, "failed to load ads for status page");
            Vec::new()
        }
    };

    match StatusPage::render(&ads) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            error!(%error, "failed to render status page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /update` - trigger one reconciliation pass.
pub async fn update(State(state): State<AppState>) -> Response {
    match run_pass(
        state.wishlist(),
        state.ads(),
        state.marketplace(),
        state.notifier(),
        state.status_page(),
    )
    .await
    {
        Ok(_) => "OK".into_response(),
        Err(error) => {
            error!(%error, "reconciliation pass failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
