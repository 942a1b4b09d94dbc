//! OLX search client.

use tracing::debug;

use super::parse::{extract_listings, ResultsPageSelectors};
use crate::domain::Listing;
use crate::error::Result;
use crate::port::outbound::marketplace::Marketplace;

/// Marketplace adapter for OLX search pages.
///
/// Fetches a single results page per search; pagination is out of scope.
pub struct OlxClient {
    http: reqwest::Client,
    base_url: String,
    selectors: ResultsPageSelectors,
}

impl OlxClient {
    /// Create a client against the given base URL (e.g. `https://www.olx.pt`).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            selectors: ResultsPageSelectors::new(),
        }
    }

    /// Search URL for a free-text item name, spaces dashed as OLX expects.
    fn search_url(&self, item: &str) -> String {
        format!("{}/ads/q-{}", self.base_url, item.trim().replace(' ', "-"))
    }
}

impl Marketplace for OlxClient {
    async fn search(&self, item: &str) -> Result<Vec<Listing>> {
        let url = url::Url::parse(&self.search_url(item))?;
        debug!(%url, "fetching search results");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let listings = extract_listings(&body, &self.selectors);
        debug!(item, count = listings.len(), "extracted listings");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_dashes_spaces() {
        let client = OlxClient::new(reqwest::Client::new(), "https://www.olx.pt");
        assert_eq!(
            client.search_url("mountain bike"),
            "https://www.olx.pt/ads/q-mountain-bike"
        );
    }

    #[test]
    fn search_url_tolerates_trailing_slash_in_base() {
        let client = OlxClient::new(reqwest::Client::new(), "http://localhost:9000/");
        assert_eq!(client.search_url("bike"), "http://localhost:9000/ads/q-bike");
    }
}
