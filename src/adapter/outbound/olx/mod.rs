//! OLX marketplace adapter.
//!
//! Fetches search result pages over HTTP and extracts candidate listings
//! from the returned HTML.

mod client;
mod parse;

pub use client::OlxClient;
pub use parse::{extract_listings, ResultsPageSelectors};
