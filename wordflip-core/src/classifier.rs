//! Character classification for word tokenization
//!
//! Every character falls into exactly one of three classes. Only ASCII
//! punctuation and ASCII whitespace act as separators; non-ASCII marks such
//! as `¡`, `¿`, or `。` are word material and travel with the word they
//! touch.

/// Classification of a character for tokenization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII punctuation, preserved in the output as its own unit.
    Punctuation,
    /// ASCII whitespace, discarded and re-emitted as single spaces.
    Whitespace,
    /// Anything else: letters of any script, digits, symbols, emoji.
    Word,
}

/// Classifies a single character.
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if ch.is_ascii_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Word
    }
}

/// Checks whether a character separates words (punctuation or whitespace).
pub fn is_separator(ch: char) -> bool {
    !matches!(classify(ch), CharClass::Word)
}
