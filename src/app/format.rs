//! Message formatting for chat notifications.

use crate::domain::Ad;

/// Command documentation sent in reply to `help`.
pub const HELP_TEXT: &str = "Supported commands:\n\
    'add name of item'\n\
    'rem name of item'\n\
    'list'\n\
    'help'";

/// One message enumerating every ad in a reconciliation batch.
#[must_use]
pub fn batch_message(batch: &[Ad]) -> String {
    let mut message = String::new();
    for ad in batch {
        message.push_str(&format!(
            "Item: {}\nPreço: {}\nUrl: {}\n---\n",
            ad.title, ad.price, ad.url
        ));
    }
    message
}

/// Confirmation reply listing a user's current wishlist items.
#[must_use]
pub fn wishlist_message(items: &[String]) -> String {
    if items.is_empty() {
        return "Current items:\n(none)".to_string();
    }
    let mut message = String::from("Current items:");
    for item in items {
        message.push('\n');
        message.push_str(item);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rust_decimal_macros::dec;

    #[test]
    fn batch_message_enumerates_title_price_and_url() {
        let batch = vec![Ad {
            user: UserId::new("u1"),
            item: "bike".into(),
            url: "/ad/1".into(),
            title: "Trek bike".into(),
            price: dec!(100.00),
        }];

        let message = batch_message(&batch);
        assert!(message.contains("Trek bike"));
        assert!(message.contains("100.0"));
        assert!(message.contains("/ad/1"));
    }

    #[test]
    fn batch_message_separates_entries() {
        let ad = |url: &str| Ad {
            user: UserId::new("u1"),
            item: "bike".into(),
            url: url.into(),
            title: "bike".into(),
            price: dec!(50.00),
        };

        let message = batch_message(&[ad("/ad/1"), ad("/ad/2")]);
        assert_eq!(message.matches("---").count(), 2);
    }

    #[test]
    fn wishlist_message_lists_items() {
        let message = wishlist_message(&["bike".to_string(), "kayak".to_string()]);
        assert_eq!(message, "Current items:\nbike\nkayak");
    }

    #[test]
    fn wishlist_message_handles_empty_list() {
        assert_eq!(wishlist_message(&[]), "Current items:\n(none)");
    }
}
