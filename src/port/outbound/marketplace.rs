//! Marketplace search port.

use std::future::Future;

use crate::domain::Listing;
use crate::error::Result;

/// Searches the marketplace for one wishlist item.
///
/// One call fetches a single results page; there is no pagination or
/// cursoring. Listings the page renders without a link or a parseable
/// price are skipped by the implementation, not surfaced.
pub trait Marketplace: Send + Sync {
    fn search(&self, item: &str) -> impl Future<Output = Result<Vec<Listing>>> + Send;
}
