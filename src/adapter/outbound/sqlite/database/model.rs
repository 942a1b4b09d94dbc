//! Database model types for Diesel ORM.

use chrono::Utc;
use diesel::prelude::*;

use super::schema::{ads, wishlist};
use crate::domain::{Ad, UserId, WishlistEntry};
use crate::error::{Error, Result};

/// Database row for a seen ad (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = ads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdRow {
    pub id: Option<i32>,
    pub user: String,
    pub item: String,
    pub url: String,
    pub title: String,
    pub price: String,
    pub seen_at: String,
}

/// Database row for a seen ad (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ads)]
pub struct NewAdRow {
    pub user: String,
    pub item: String,
    pub url: String,
    pub title: String,
    pub price: String,
    pub seen_at: String,
}

impl From<&Ad> for NewAdRow {
    fn from(ad: &Ad) -> Self {
        Self {
            user: ad.user.to_string(),
            item: ad.item.clone(),
            url: ad.url.clone(),
            title: ad.title.clone(),
            // Text keeps the decimal exact; scale 2 is set at parse time.
            price: ad.price.to_string(),
            seen_at: Utc::now().to_rfc3339(),
        }
    }
}

impl TryFrom<AdRow> for Ad {
    type Error = Error;

    fn try_from(row: AdRow) -> Result<Ad> {
        let price = row
            .price
            .parse()
            .map_err(|_| Error::Parse(format!("stored price is not a decimal: {}", row.price)))?;
        Ok(Ad {
            user: UserId::new(row.user),
            item: row.item,
            url: row.url,
            title: row.title,
            price,
        })
    }
}

/// Database row for a wishlist entry (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = wishlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WishlistRow {
    pub id: Option<i32>,
    pub user: String,
    pub item: String,
}

/// Database row for a wishlist entry (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = wishlist)]
pub struct NewWishlistRow {
    pub user: String,
    pub item: String,
}

impl From<&WishlistEntry> for NewWishlistRow {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            user: entry.user.to_string(),
            item: entry.item.clone(),
        }
    }
}

impl From<WishlistRow> for WishlistEntry {
    fn from(row: WishlistRow) -> Self {
        Self {
            user: UserId::new(row.user),
            item: row.item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn ad_roundtrips_through_rows() {
        let ad = Ad {
            user: UserId::new("u1"),
            item: "bike".into(),
            url: "/ad/1".into(),
            title: "Trek bike".into(),
            price: dec!(100.00),
        };

        let new_row = NewAdRow::from(&ad);
        assert_eq!(new_row.price, "100.00");

        let row = AdRow {
            id: Some(1),
            user: new_row.user,
            item: new_row.item,
            url: new_row.url,
            title: new_row.title,
            price: new_row.price,
            seen_at: new_row.seen_at,
        };
        assert_eq!(Ad::try_from(row).unwrap(), ad);
    }

    #[test]
    fn corrupt_price_is_a_parse_error() {
        let row = AdRow {
            id: Some(1),
            user: "u1".into(),
            item: "bike".into(),
            url: "/ad/1".into(),
            title: "Trek bike".into(),
            price: "not-a-price".into(),
            seen_at: Utc::now().to_rfc3339(),
        };
        assert!(matches!(Ad::try_from(row), Err(Error::Parse(_))));
    }
}
