//! HTML extraction for OLX search result pages.

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::{parse_price, Listing};

/// One results page worth of selectors, compiled once.
pub struct ResultsPageSelectors {
    offer: Selector,
    link: Selector,
    title: Selector,
    price: Selector,
}

impl ResultsPageSelectors {
    #[must_use]
    pub fn new() -> Self {
        // The selectors are static strings, so parse cannot fail at runtime.
        Self {
            offer: Selector::parse("td[class*='offer']").expect("static selector"),
            link: Selector::parse("h3 a").expect("static selector"),
            title: Selector::parse("h3 a strong").expect("static selector"),
            price: Selector::parse("p[class*='price'] strong").expect("static selector"),
        }
    }
}

impl Default for ResultsPageSelectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract candidate listings from a results page.
///
/// A cell missing its link, title, or a parseable price is skipped.
pub fn extract_listings(html: &str, selectors: &ResultsPageSelectors) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for offer in document.select(&selectors.offer) {
        let Some(url) = offer
            .select(&selectors.link)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };

        let Some(title) = offer
            .select(&selectors.title)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
        else {
            debug!(url, "skipping offer without a title");
            continue;
        };

        let Some(raw_price) = offer
            .select(&selectors.price)
            .next()
            .map(|p| p.text().collect::<String>())
        else {
            debug!(url, "skipping offer without a price");
            continue;
        };

        let price = match parse_price(&raw_price) {
            Ok(price) => price,
            Err(_) => {
                debug!(url, raw_price = raw_price.trim(), "skipping unparseable price");
                continue;
            }
        };

        listings.push(Listing {
            url: url.to_string(),
            title,
            price,
        });
    }

    listings
}
