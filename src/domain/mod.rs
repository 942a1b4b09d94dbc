//! Marketplace-agnostic domain types.

mod ad;
mod command;
mod id;
mod price;
mod wishlist;

pub use ad::{Ad, Listing};
pub use command::Command;
pub use id::UserId;
pub use price::parse_price;
pub use wishlist::WishlistEntry;
