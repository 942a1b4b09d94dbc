//! Messenger notification adapter.

mod client;

pub use client::MessengerClient;
