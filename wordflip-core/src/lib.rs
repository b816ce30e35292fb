//! Word-level text reversal
//!
//! This crate provides two total transformations over a line of text:
//! [`reverse_lettering`] mirrors the characters inside each word while
//! keeping the words in place, and [`reverse_words_order`] mirrors the
//! sequence of words while keeping each word intact. Both accept any
//! string, never fail, and normalize interior whitespace to single spaces.
//!
//! Punctuation is preserved but handled asymmetrically: per-word reversal
//! keeps a trailing mark trailing its word, while word-order reversal
//! carries marks to the front of the word they followed, as if the whole
//! line were mirrored.
//!
//! # Example
//!
//! ```rust
//! use wordflip_core::{reverse_lettering, reverse_words_order};
//!
//! assert_eq!(reverse_lettering("My name is PowerMilk"), "yM eman si kliMrewoP");
//! assert_eq!(reverse_words_order("My name is PowerMilk"), "PowerMilk is name My");
//!
//! assert_eq!(reverse_lettering("hello!"), "olleh!");
//! assert_eq!(reverse_words_order("hello!"), "!hello");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod classifier;
pub mod reverse;
pub mod tokenizer;

// Re-export the two operations and the pipeline pieces they compose
pub use assembler::{assemble, trim_separator_spaces, TrimDirection};
pub use classifier::{classify, is_separator, CharClass};
pub use reverse::{reverse_lettering, reverse_words_order};
pub use tokenizer::{tokenize, Token};
