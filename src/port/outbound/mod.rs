//! Outbound ports (driven adapters implement these).

pub mod marketplace;
pub mod notifier;
pub mod store;
