//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the wishlist and ad stores
//! using Diesel ORM.

pub mod database;
pub mod store;
