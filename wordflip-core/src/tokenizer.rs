//! Word tokenization
//!
//! Splits text into an ordered token stream in which whitespace disappears
//! and punctuation survives as token material. Split points are whitespace
//! runs and the position before each punctuation character; nothing splits
//! *after* punctuation, so a mark fuses with word characters that follow it
//! directly:
//!
//! ```text
//! "hello, world"  ->  ["hello", ",", "world"]
//! "a!b"           ->  ["a", "!b"]
//! "  trim me  "   ->  ["trim", "me"]
//! ```

use std::fmt;

use crate::classifier::{classify, CharClass};

/// A single tokenizer output unit.
///
/// A token is either a maximal run of word characters, or a punctuation
/// character together with the word characters that immediately follow it;
/// punctuation followed by whitespace, more punctuation, or end of input
/// forms a single-character token. Tokens are never empty and never contain
/// whitespace.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Token(String);

impl Token {
    /// Creates a token from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrows the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns a token with the character order mirrored.
    ///
    /// Reversal is per Unicode code point; multi-code-point grapheme
    /// clusters (combining accents, emoji sequences) are reversed piecewise.
    pub fn reversed(&self) -> Token {
        Token(self.0.chars().rev().collect())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits `input` into word and punctuation tokens.
///
/// Leading and trailing whitespace contribute nothing; empty and
/// whitespace-only input produce an empty stream.
///
/// # Examples
///
/// ```
/// use wordflip_core::{tokenize, Token};
///
/// let tokens = tokenize("hello, world");
/// assert_eq!(
///     tokens,
///     vec![Token::new("hello"), Token::new(","), Token::new("world")]
/// );
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    // Byte offset where the currently open token begins, if any.
    let mut start: Option<usize> = None;

    for (idx, ch) in input.char_indices() {
        match classify(ch) {
            CharClass::Whitespace => {
                if let Some(from) = start.take() {
                    tokens.push(Token::new(&input[from..idx]));
                }
            }
            CharClass::Punctuation => {
                if let Some(from) = start.take() {
                    tokens.push(Token::new(&input[from..idx]));
                }
                start = Some(idx);
            }
            CharClass::Word => {
                if start.is_none() {
                    start = Some(idx);
                }
            }
        }
    }

    if let Some(from) = start {
        tokens.push(Token::new(&input[from..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_splits_on_single_spaces() {
        assert_eq!(texts(&tokenize("hello world")), ["hello", "world"]);
    }

    #[test]
    fn test_collapses_mixed_whitespace_runs() {
        assert_eq!(texts(&tokenize("a \t\n\r b")), ["a", "b"]);
        assert_eq!(texts(&tokenize("hello\tworld")), ["hello", "world"]);
    }

    #[test]
    fn test_trailing_punctuation_is_its_own_token() {
        assert_eq!(texts(&tokenize("hello!")), ["hello", "!"]);
        assert_eq!(texts(&tokenize("zdrowie,")), ["zdrowie", ","]);
    }

    #[test]
    fn test_punctuation_absorbs_following_word_characters() {
        assert_eq!(texts(&tokenize("a!b")), ["a", "!b"]);
        assert_eq!(texts(&tokenize("don't")), ["don", "'t"]);
        assert_eq!(texts(&tokenize("!a")), ["!a"]);
    }

    #[test]
    fn test_consecutive_punctuation_splits_before_each_mark() {
        assert_eq!(texts(&tokenize("!!!")), ["!", "!", "!"]);
        assert_eq!(texts(&tokenize("a!!b")), ["a", "!", "!b"]);
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
        assert!(tokenize(" \t\r\n").is_empty());
    }

    #[test]
    fn test_boundary_whitespace_is_discarded() {
        assert_eq!(texts(&tokenize("   hello world   ")), ["hello", "world"]);
    }

    #[test]
    fn test_non_ascii_punctuation_stays_inside_words() {
        assert_eq!(texts(&tokenize("¡Hola! ¿Qué tal?")), ["¡Hola", "!", "¿Qué", "tal", "?"]);
    }

    #[test]
    fn test_cjk_words_split_on_spaces_only() {
        assert_eq!(texts(&tokenize("你好 世界")), ["你好", "世界"]);
    }

    #[test]
    fn test_token_reversal_is_code_point_wise() {
        assert_eq!(Token::new("abc").reversed(), Token::new("cba"));
        assert_eq!(Token::new("你好").reversed(), Token::new("好你"));
        assert_eq!(Token::new("!b").reversed(), Token::new("b!"));
    }

    #[test]
    fn test_token_display_and_accessors() {
        let token = Token::new("jesteś");
        assert_eq!(token.as_str(), "jesteś");
        assert_eq!(token.to_string(), "jesteś");
        assert_eq!(token.into_string(), "jesteś");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_token_serde_round_trip() {
        let token = Token::new("world");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"world\"");
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
