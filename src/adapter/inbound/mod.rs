//! Inbound adapters (driving side).

pub mod http;
