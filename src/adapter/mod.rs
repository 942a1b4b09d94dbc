//! Adapters binding the ports to real infrastructure.

pub mod inbound;
pub mod outbound;
