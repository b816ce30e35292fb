//! Basic usage example for the two reversal operations

use wordflip_core::{assemble, reverse_lettering, reverse_words_order, tokenize, TrimDirection};

fn main() {
    // Method 1: Reverse the lettering of each word
    println!("=== Method 1: Per-Word Lettering Reversal ===");
    for line in ["My name is PowerMilk", "hello world"] {
        println!("  {:?} -> {:?}", line, reverse_lettering(line));
    }

    // Method 2: Reverse the order of the words
    println!("\n=== Method 2: Word-Order Reversal ===");
    for line in ["My name is PowerMilk", "hello world"] {
        println!("  {:?} -> {:?}", line, reverse_words_order(line));
    }

    // Method 3: Punctuation moves differently under each operation
    println!("\n=== Method 3: Punctuation Handling ===");
    let line = "Litwo! Ojczyzno moja!";
    println!("  input:     {:?}", line);
    println!("  lettering: {:?}", reverse_lettering(line));
    println!("  order:     {:?}", reverse_words_order(line));

    // Method 4: Drive the pipeline pieces directly
    println!("\n=== Method 4: Manual Pipeline ===");
    let tokens = tokenize("hello, world!");
    println!("  tokens: {:?}", tokens);

    let mut flipped = tokens;
    flipped.reverse();
    println!(
        "  reassembled: {:?}",
        assemble(&flipped, TrimDirection::Trailing)
    );
}
