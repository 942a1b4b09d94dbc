//! Messenger webhook handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::app::commands::dispatch;
use crate::domain::{Command, UserId};

use super::state::AppState;

/// Query parameters of the platform's verification handshake.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
}

/// `GET /messenger` - webhook verification handshake.
///
/// Echoes the challenge when the verify token matches the configured
/// secret; answers 403 on a mismatch. Plain browser visits get a greeting.
pub async fn verify(State(state): State<AppState>, Query(params): Query<VerifyParams>) -> Response {
    match (params.mode.as_deref(), params.challenge) {
        (Some("subscribe"), Some(challenge)) => {
            if params.verify_token.as_deref() == Some(state.config().verify_token.as_str()) {
                challenge.into_response()
            } else {
                warn!("webhook verification with mismatched token");
                (StatusCode::FORBIDDEN, "Verification token mismatch").into_response()
            }
        }
        _ => "Hello :)".into_response(),
    }
}

/// Inbound page-event payload. Unknown fields are ignored throughout.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    object: String,
    #[serde(default)]
    entry: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
struct EventEntry {
    #[serde(default)]
    messaging: Vec<MessagingEvent>,
}

#[derive(Debug, Deserialize)]
struct MessagingEvent {
    sender: Sender,
    message: Option<ReceivedMessage>,
}

#[derive(Debug, Deserialize)]
struct Sender {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ReceivedMessage {
    text: Option<String>,
}

/// `POST /messenger` - receive chat events.
///
/// Always answers 200: the platform retries on errors and a poison payload
/// would loop forever. Failures are logged instead.
pub async fn receive(State(state): State<AppState>, body: String) -> StatusCode {
    match serde_json::from_str::<WebhookEvent>(&body) {
        Ok(event) => handle_event(&state, event).await,
        Err(error) => warn!(%error, "unparseable webhook payload"),
    }
    StatusCode::OK
}

async fn handle_event(state: &AppState, event: WebhookEvent) {
    if event.object != "page" {
        debug!(object = %event.object, "ignoring non-page event");
        return;
    }

    for entry in event.entry {
        for messaging in entry.messaging {
            let Some(text) = messaging.message.and_then(|m| m.text) else {
                continue;
            };
            let sender = UserId::new(messaging.sender.id);

            let Some(command) = Command::parse(&text) else {
                debug!(sender = %sender, "ignoring unrecognized command");
                continue;
            };

            if let Err(error) = dispatch(command, &sender, state.wishlist(), state.notifier()).await
            {
                error!(sender = %sender, %error, "command handling failed");
            }
        }
    }
}
