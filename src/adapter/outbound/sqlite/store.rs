//! SQLite wishlist and ad store implementations.
//!
//! Persistent storage for wishlist entries and previously seen ads using
//! SQLite and Diesel ORM.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    AdRow, NewAdRow, NewWishlistRow, WishlistRow,
};
use crate::adapter::outbound::sqlite::database::schema::{ads, wishlist};
use crate::domain::{Ad, UserId, WishlistEntry};
use crate::error::{Error, Result};
use crate::port::outbound::store::{AdStore, WishlistStore};

/// SQLite-backed wishlist store.
pub struct SqliteWishlistStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteWishlistStore {
    /// Create a new SQLite wishlist store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl WishlistStore for SqliteWishlistStore {
    async fn add(&self, entry: &WishlistEntry) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(wishlist::table)
            .values(NewWishlistRow::from(entry))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn remove_item(&self, item: &str) -> Result<usize> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // Deliberately no user filter: `rem` has always dropped the item
        // for everyone (see DESIGN.md).
        let removed = diesel::delete(wishlist::table.filter(wishlist::item.eq(item)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(removed)
    }

    async fn items_for_user(&self, user: &UserId) -> Result<Vec<String>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<WishlistRow> = wishlist::table
            .filter(wishlist::user.eq(user.as_str()))
            .order(wishlist::id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.item).collect())
    }

    async fn users(&self) -> Result<Vec<UserId>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let users: Vec<String> = wishlist::table
            .select(wishlist::user)
            .distinct()
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(users.into_iter().map(UserId::new).collect())
    }
}

/// SQLite-backed store for previously seen ads.
pub struct SqliteAdStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteAdStore {
    /// Create a new SQLite ad store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn load_rows(rows: Vec<AdRow>) -> Result<Vec<Ad>> {
        rows.into_iter().map(Ad::try_from).collect()
    }
}

impl AdStore for SqliteAdStore {
    async fn ads_for_user(&self, user: &UserId) -> Result<Vec<Ad>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<AdRow> = ads::table
            .filter(ads::user.eq(user.as_str()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Self::load_rows(rows)
    }

    async fn save(&self, ad: &Ad) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // REPLACE INTO against UNIQUE(user, item, url): the stale row is
        // removed before the replacement is inserted.
        diesel::replace_into(ads::table)
            .values(NewAdRow::from(ad))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Ad>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<AdRow> = ads::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        // Prices are stored as text, so order here rather than in SQL.
        let mut all = Self::load_rows(rows)?;
        all.sort_by(|a, b| a.price.cmp(&b.price));
        Ok(all)
    }
}
