//! The two reversal operations
//!
//! Both run the same pipeline: tokenize, transform the token stream,
//! reassemble. They differ only in the transform (mirror each token versus
//! mirror the stream) and in which side of the punctuation the reassembly
//! trims.

use crate::assembler::{assemble, TrimDirection};
use crate::tokenizer::{tokenize, Token};

/// Reverses the characters of every word while keeping word order.
///
/// Punctuation travels with its word: a mark that trailed a word in the
/// input trails the reversed word in the output.
///
/// # Examples
///
/// ```
/// use wordflip_core::reverse_lettering;
///
/// assert_eq!(reverse_lettering("hello world"), "olleh dlrow");
/// assert_eq!(reverse_lettering("hello!"), "olleh!");
/// assert_eq!(reverse_lettering(""), "");
/// ```
pub fn reverse_lettering(input: &str) -> String {
    let tokens: Vec<Token> = tokenize(input).iter().map(Token::reversed).collect();
    assemble(&tokens, TrimDirection::Leading)
}

/// Reverses the order of words while keeping each word intact.
///
/// A mark that trailed a word in the input ends up leading it in the
/// output, mirroring the whole line around its center.
///
/// # Examples
///
/// ```
/// use wordflip_core::reverse_words_order;
///
/// assert_eq!(reverse_words_order("My name is PowerMilk"), "PowerMilk is name My");
/// assert_eq!(reverse_words_order("hello!"), "!hello");
/// assert_eq!(reverse_words_order(""), "");
/// ```
pub fn reverse_words_order(input: &str) -> String {
    let mut tokens = tokenize(input);
    tokens.reverse();
    assemble(&tokens, TrimDirection::Trailing)
}
