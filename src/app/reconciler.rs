//! Reconciliation pass: scrape, diff, persist, notify.
//!
//! One pass walks every user with wishlist entries, scrapes each of their
//! items, and compares the candidates against previously seen ads. Unseen
//! urls are new; a strictly lower price on a known url replaces the stored
//! row. Each user with a non-empty batch gets exactly one message.

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::app::format::batch_message;
use crate::app::status_page::StatusPage;
use crate::domain::{Ad, UserId};
use crate::error::Result;
use crate::port::outbound::marketplace::Marketplace;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::{AdStore, WishlistStore};

/// Counters from one reconciliation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Users with at least one wishlist entry that were processed.
    pub users_processed: usize,
    /// New or repriced ads found across all users.
    pub ads_found: usize,
}

/// Run one reconciliation pass across all users.
///
/// A failing store read degrades to an empty set; a failing search skips
/// that item; a failing send is logged. A store write failure abandons the
/// affected user and moves on. The pass itself only fails if the status
/// page cannot be regenerated from an otherwise healthy store.
///
/// # Errors
/// Returns an error when status page regeneration fails.
pub async fn run_pass<W, A, M, N>(
    wishlist: &W,
    ads: &A,
    marketplace: &M,
    notifier: &N,
    status_page: &StatusPage,
) -> Result<PassSummary>
where
    W: WishlistStore,
    A: AdStore,
    M: Marketplace,
    N: Notifier,
{
    let users = match wishlist.users().await {
        Ok(users) => users,
        Err(error) => {
            error!(%error, "failed to load users, treating wishlist as empty");
            Vec::new()
        }
    };

    let mut summary = PassSummary::default();

    for user in users {
        match reconcile_user(&user, wishlist, ads, marketplace, notifier).await {
            Ok(found) => {
                summary.users_processed += 1;
                summary.ads_found += found;
            }
            Err(error) => {
                error!(user = %user, %error, "reconciliation failed for user");
            }
        }
    }

    // The page also needs a first write when nothing changed yet.
    if summary.ads_found > 0 || !status_page.exists() {
        let all = match ads.all().await {
            Ok(all) => all,
            Err(error) => {
                error!(%error, "failed to load ads for status page");
                Vec::new()
            }
        };
        status_page.write(&all)?;
    }

    info!(
        users = summary.users_processed,
        found = summary.ads_found,
        "reconciliation pass complete"
    );
    Ok(summary)
}

/// Reconcile one user: returns how many ads were new or repriced.
async fn reconcile_user<W, A, M, N>(
    user: &UserId,
    wishlist: &W,
    ads: &A,
    marketplace: &M,
    notifier: &N,
) -> Result<usize>
where
    W: WishlistStore,
    A: AdStore,
    M: Marketplace,
    N: Notifier,
{
    let items = wishlist.items_for_user(user).await?;
    if items.is_empty() {
        return Ok(0);
    }

    let prior = match ads.ads_for_user(user).await {
        Ok(prior) => prior,
        Err(error) => {
            error!(user = %user, %error, "failed to load seen ads, starting from empty");
            Vec::new()
        }
    };
    // Ads for items no longer on the wishlist don't participate in the diff.
    let prior: Vec<Ad> = prior
        .into_iter()
        .filter(|ad| items.contains(&ad.item))
        .collect();

    let mut batch: Vec<Ad> = Vec::new();
    let mut searched: HashSet<&str> = HashSet::new();

    for item in &items {
        // Duplicate wishlist entries scrape the item once.
        if !searched.insert(item.as_str()) {
            continue;
        }

        let candidates = match marketplace.search(item).await {
            Ok(candidates) => candidates,
            Err(error) => {
                error!(user = %user, %item, %error, "search failed, skipping item");
                continue;
            }
        };

        for listing in candidates {
            let known = prior
                .iter()
                .find(|ad| ad.item == *item && ad.url == listing.url);
            match known {
                None => {
                    batch.push(Ad::from_listing(user.clone(), item.clone(), listing));
                }
                Some(existing) if listing.price < existing.price => {
                    batch.push(Ad::from_listing(user.clone(), item.clone(), listing));
                }
                Some(_) => {} // unchanged or more expensive
            }
        }
    }

    if !batch.is_empty() {
        for ad in &batch {
            ads.save(ad).await?;
        }
        if let Err(error) = notifier.send(user, &batch_message(&batch)).await {
            warn!(user = %user, %error, "failed to deliver batch notification");
        }
    }

    info!(user = %user, found = batch.len(), "reconciled user");
    Ok(batch.len())
}
