//! Outbound notification port.

use std::future::Future;

use crate::domain::UserId;
use crate::error::Result;

/// Sends a plain-text chat message to one recipient.
///
/// Delivery is best-effort: callers log a failure and keep going, they
/// never abort a pass because a message did not land.
pub trait Notifier: Send + Sync {
    fn send(&self, recipient: &UserId, text: &str) -> impl Future<Output = Result<()>> + Send;
}
