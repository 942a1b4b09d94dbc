//! Chat command handlers.
//!
//! Each command is a synchronous store mutation (or read) followed by one
//! confirmation reply. A reply that fails to deliver is logged and dropped;
//! the mutation has already happened and stands.

use tracing::{info, warn};

use crate::app::format::{wishlist_message, HELP_TEXT};
use crate::domain::{Command, UserId, WishlistEntry};
use crate::error::Result;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::WishlistStore;

/// Execute one parsed command on behalf of `sender`.
///
/// # Errors
/// Returns an error when a store operation fails; delivery failures are
/// logged, not returned.
pub async fn dispatch<W, N>(
    command: Command,
    sender: &UserId,
    wishlist: &W,
    notifier: &N,
) -> Result<()>
where
    W: WishlistStore,
    N: Notifier,
{
    match command {
        Command::Add(item) => {
            wishlist
                .add(&WishlistEntry::new(sender.clone(), item.clone()))
                .await?;
            info!(user = %sender, %item, "wishlist item added");
            reply_with_items(sender, wishlist, notifier).await
        }
        Command::Remove(item) => {
            let removed = wishlist.remove_item(&item).await?;
            info!(user = %sender, %item, removed, "wishlist item removed");
            reply_with_items(sender, wishlist, notifier).await
        }
        Command::List => reply_with_items(sender, wishlist, notifier).await,
        Command::Help => {
            reply(notifier, sender, HELP_TEXT).await;
            Ok(())
        }
    }
}

async fn reply_with_items<W, N>(sender: &UserId, wishlist: &W, notifier: &N) -> Result<()>
where
    W: WishlistStore,
    N: Notifier,
{
    let items = wishlist.items_for_user(sender).await?;
    reply(notifier, sender, &wishlist_message(&items)).await;
    Ok(())
}

async fn reply<N: Notifier>(notifier: &N, recipient: &UserId, text: &str) {
    if let Err(error) = notifier.send(recipient, text).await {
        warn!(recipient = %recipient, %error, "failed to deliver reply");
    }
}
