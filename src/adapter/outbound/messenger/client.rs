//! Messenger Send API client.

use serde::Serialize;
use tracing::{debug, error};

use crate::domain::UserId;
use crate::error::Result;
use crate::port::outbound::notifier::Notifier;

/// Send API request body.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    recipient: Recipient<'a>,
    message: Message<'a>,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    text: &'a str,
}

/// Notifier that delivers messages through the Messenger Send API.
pub struct MessengerClient {
    http: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl MessengerClient {
    /// Create a client for the given Send API endpoint and page token.
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            access_token: access_token.into(),
        }
    }
}

impl Notifier for MessengerClient {
    async fn send(&self, recipient: &UserId, text: &str) -> Result<()> {
        debug!(recipient = %recipient, "sending message");

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("access_token", self.access_token.as_str())])
            .json(&SendRequest {
                recipient: Recipient {
                    id: recipient.as_str(),
                },
                message: Message { text },
            })
            .send()
            .await?;

        // A rejected send is logged, not retried and not escalated; the
        // platform's reason ends up in the log for operators.
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "message delivery rejected");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_wire_format() {
        let request = SendRequest {
            recipient: Recipient { id: "1234" },
            message: Message { text: "hello" },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "recipient": {"id": "1234"},
                "message": {"text": "hello"}
            })
        );
    }

    #[tokio::test]
    async fn rejected_delivery_is_swallowed_after_logging() {
        use axum::http::StatusCode;
        use axum::routing::post;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = axum::Router::new().route(
            "/me/messages",
            post(|| async { (StatusCode::BAD_REQUEST, "invalid access token") }),
        );
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = MessengerClient::new(
            reqwest::Client::new(),
            format!("http://{addr}/me/messages"),
            "bad-token",
        );

        client.send(&UserId::new("1234"), "hello").await.unwrap();
    }
}
