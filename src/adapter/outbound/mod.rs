//! Outbound adapters (driven side).

pub mod messenger;
pub mod olx;
pub mod sqlite;
