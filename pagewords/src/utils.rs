// src/utils.rs
use crate::models::WordFrequencies;

/// Prints the first `top` words with their counts, one line per word.
///
/// The order is whatever the partitioner left behind: these are the most
/// frequent words on the page, but they are not sorted among themselves.
pub fn print_top_words(frequencies: &WordFrequencies, top: usize) {
    for word in frequencies.words.iter().take(top) {
        println!("{word} - times on page: {}", frequencies.count(word));
    }
}
