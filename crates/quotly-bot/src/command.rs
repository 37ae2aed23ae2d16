// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound command parsing.

/// A parsed inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// Fetch a quote, optionally from a named category.
    Quote { category: Option<String> },
    /// Favorite the last fetched quote.
    Favorite,
    /// List the user's favorites.
    Favorites,
    /// Remove a favorite by its exact text. `None` when no argument given.
    RemoveFavorite { text: Option<String> },
    /// Anything else, including plain text and retired commands.
    Unknown,
}

impl Command {
    /// Parses a message text into a command.
    ///
    /// Accepts bot-suffix forms (`/quote@SomeBot`). The `remove_favorite`
    /// argument is re-joined from whitespace-separated tokens with single
    /// spaces, so a quote containing internal multi-space runs will not
    /// match its stored text.
    pub fn parse(text: &str) -> Command {
        let mut tokens = text.split_whitespace();
        let Some(first) = tokens.next() else {
            return Command::Unknown;
        };
        let Some(name) = first.strip_prefix('/') else {
            return Command::Unknown;
        };
        let name = name.split('@').next().unwrap_or_default();

        match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "quote" => Command::Quote {
                category: tokens.next().map(str::to_string),
            },
            "favorite" => Command::Favorite,
            "favorites" => Command::Favorites,
            "remove_favorite" => {
                let rest: Vec<&str> = tokens.collect();
                Command::RemoveFavorite {
                    text: if rest.is_empty() {
                        None
                    } else {
                        Some(rest.join(" "))
                    },
                }
            }
            _ => Command::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/favorite"), Command::Favorite);
        assert_eq!(Command::parse("/favorites"), Command::Favorites);
    }

    #[test]
    fn parses_quote_with_and_without_category() {
        assert_eq!(Command::parse("/quote"), Command::Quote { category: None });
        assert_eq!(
            Command::parse("/quote courage"),
            Command::Quote {
                category: Some("courage".into())
            }
        );
    }

    #[test]
    fn parses_bot_suffix_form() {
        assert_eq!(
            Command::parse("/quote@QuotlyBot courage"),
            Command::Quote {
                category: Some("courage".into())
            }
        );
    }

    #[test]
    fn remove_favorite_joins_tokens_with_single_spaces() {
        assert_eq!(
            Command::parse("/remove_favorite to be   or  not"),
            Command::RemoveFavorite {
                text: Some("to be or not".into())
            }
        );
    }

    #[test]
    fn remove_favorite_without_argument() {
        assert_eq!(
            Command::parse("/remove_favorite"),
            Command::RemoveFavorite { text: None }
        );
    }

    #[test]
    fn plain_text_and_unknown_commands_are_unknown() {
        assert_eq!(Command::parse("hello there"), Command::Unknown);
        assert_eq!(Command::parse("/frobnicate"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("   "), Command::Unknown);
    }

    #[test]
    fn retired_categories_command_is_unknown() {
        assert_eq!(Command::parse("/categories"), Command::Unknown);
    }
}
