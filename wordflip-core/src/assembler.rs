//! Token stream reassembly
//!
//! Joins tokens back into text with single spaces, then removes the spaces
//! the join introduced next to punctuation. Which side loses its space
//! depends on the operation: per-word reversal keeps the stream order, so a
//! lone mark still follows its word and the space before it goes; word-order
//! reversal flips the stream, so a lone mark now precedes its word and the
//! space after it goes.

use crate::classifier::is_separator;
use crate::tokenizer::Token;

/// Which space next to a separator character gets removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrimDirection {
    /// Removes the space before each separator ("olleh !" becomes "olleh!").
    Leading,
    /// Removes the space after each separator ("! hello" becomes "!hello").
    Trailing,
}

/// Joins tokens with single spaces and trims separator-adjacent spaces.
///
/// An empty token stream assembles to an empty string.
///
/// # Examples
///
/// ```
/// use wordflip_core::{assemble, Token, TrimDirection};
///
/// let tokens = [Token::new("olleh"), Token::new("!")];
/// assert_eq!(assemble(&tokens, TrimDirection::Leading), "olleh!");
/// ```
pub fn assemble(tokens: &[Token], direction: TrimDirection) -> String {
    let joined = tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    trim_separator_spaces(&joined, direction)
}

/// Removes every space adjacent to a separator on the given side.
///
/// For [`TrimDirection::Leading`] a space is dropped when the character
/// after it is a separator; for [`TrimDirection::Trailing`] when the
/// character before it is one. A single pass reaches a fixed point, so
/// applying the trim twice returns the same text as applying it once.
pub fn trim_separator_spaces(text: &str, direction: TrimDirection) -> String {
    let mut result = String::with_capacity(text.len());

    match direction {
        TrimDirection::Leading => {
            let mut chars = text.chars().peekable();
            while let Some(ch) = chars.next() {
                if ch == ' ' && chars.peek().copied().is_some_and(is_separator) {
                    continue;
                }
                result.push(ch);
            }
        }
        TrimDirection::Trailing => {
            let mut prev: Option<char> = None;
            for ch in text.chars() {
                if !(ch == ' ' && prev.is_some_and(is_separator)) {
                    result.push(ch);
                }
                prev = Some(ch);
            }
        }
    }

    result
}
