//! Scraped listings and persisted ad records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A candidate listing extracted from one marketplace results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Link to the ad, as found on the results page.
    pub url: String,
    pub title: String,
    /// Asking price, two-decimal scale.
    pub price: Decimal,
}

/// A listing persisted for a user and wishlist item.
///
/// The url is unique within one (user, item) combination; a cheaper
/// re-listing replaces the stored row rather than sitting next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub user: UserId,
    pub item: String,
    pub url: String,
    pub title: String,
    pub price: Decimal,
}

impl Ad {
    /// Bind a scraped listing to the user and item it was scraped for.
    #[must_use]
    pub fn from_listing(user: UserId, item: impl Into<String>, listing: Listing) -> Self {
        Self {
            user,
            item: item.into(),
            url: listing.url,
            title: listing.title,
            price: listing.price,
        }
    }
}
