//! Persistence ports for wishlists and seen ads.

use std::future::Future;

use crate::domain::{Ad, UserId, WishlistEntry};
use crate::error::Result;

/// Storage operations for wishlist entries.
pub trait WishlistStore: Send + Sync {
    /// Append an entry. Duplicates are tolerated.
    fn add(&self, entry: &WishlistEntry) -> impl Future<Output = Result<()>> + Send;

    /// Remove every entry matching the item name verbatim, regardless of
    /// which user owns it. Returns the number of rows removed.
    ///
    /// The cross-user scope is inherited behavior; see DESIGN.md before
    /// narrowing it.
    fn remove_item(&self, item: &str) -> impl Future<Output = Result<usize>> + Send;

    /// Item names on one user's wishlist, in insertion order.
    fn items_for_user(&self, user: &UserId) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Distinct users with at least one wishlist entry.
    fn users(&self) -> impl Future<Output = Result<Vec<UserId>>> + Send;
}

/// Storage operations for previously seen ads.
pub trait AdStore: Send + Sync {
    /// All stored ads for one user.
    fn ads_for_user(&self, user: &UserId) -> impl Future<Output = Result<Vec<Ad>>> + Send;

    /// Save an ad, replacing any stored row with the same (user, item, url)
    /// key. The old row is gone before the replacement lands.
    fn save(&self, ad: &Ad) -> impl Future<Output = Result<()>> + Send;

    /// Every stored ad, cheapest first. Feeds the status page.
    fn all(&self) -> impl Future<Output = Result<Vec<Ad>>> + Send;
}
