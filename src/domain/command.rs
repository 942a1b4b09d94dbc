//! Chat command parsing.
//!
//! Inbound messages follow a `command rest...` grammar with a
//! case-insensitive command word. The command set is closed; anything else
//! is dropped silently, so parsing yields an `Option` rather than an error.

/// Supported chat commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start tracking an item.
    Add(String),
    /// Stop tracking an item. Matches the item name verbatim and removes
    /// every user's entries for it, not only the caller's.
    Remove(String),
    /// Show the caller's tracked items.
    List,
    /// Show command documentation.
    Help,
}

impl Command {
    /// Parse a chat message into a command, or `None` for anything outside
    /// the command set (including `add`/`rem` without an item).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let (head, rest) = match trimmed.split_once(' ') {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        match head.to_lowercase().as_str() {
            "add" if !rest.is_empty() => Some(Self::Add(rest.to_string())),
            "rem" if !rest.is_empty() => Some(Self::Remove(rest.to_string())),
            "list" => Some(Self::List),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_argument() {
        assert_eq!(
            Command::parse("add bicycle"),
            Some(Command::Add("bicycle".into()))
        );
    }

    #[test]
    fn parses_multi_word_item() {
        assert_eq!(
            Command::parse("add mountain bike 29"),
            Some(Command::Add("mountain bike 29".into()))
        );
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(Command::parse("LIST"), Some(Command::List));
        assert_eq!(Command::parse("Help"), Some(Command::Help));
        assert_eq!(
            Command::parse("REM bike"),
            Some(Command::Remove("bike".into()))
        );
    }

    #[test]
    fn unknown_command_is_dropped() {
        assert_eq!(Command::parse("buy bicycle"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn add_without_item_is_dropped() {
        assert_eq!(Command::parse("add"), None);
        assert_eq!(Command::parse("rem  "), None);
    }
}
