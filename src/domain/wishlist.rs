//! Wishlist entries.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// One (user, item) pair on the wishlist.
///
/// Uniqueness is not enforced; adding the same item twice leaves two
/// entries, and the reconciler simply scrapes the item once per distinct
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub user: UserId,
    pub item: String,
}

impl WishlistEntry {
    pub fn new(user: impl Into<UserId>, item: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
        }
    }
}
