// src/core/count.rs
use crate::core::tokenizer::words;
use crate::models::WordFrequencies;

/// Builds the frequency table for an ordered sequence of text fragments.
///
/// Tokenization and counting are interleaved: each token is recorded as it
/// is produced, so the raw word list is never materialized in between.
#[must_use]
pub fn count_fragments<I, S>(fragments: I) -> WordFrequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = WordFrequencies::new();
    for fragment in fragments {
        for word in words(fragment.as_ref()) {
            frequencies.record(word);
        }
    }
    frequencies
}
