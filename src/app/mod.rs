//! Application core: command handling and reconciliation.

pub mod commands;
pub mod format;
pub mod reconciler;
pub mod status_page;
