// src/core/tokenizer.rs

/// Splits a text fragment into normalized word tokens.
///
/// Each whitespace-delimited piece is lowercased, then stripped of every
/// character outside `a-z`. Digits, punctuation, hyphens and underscores
/// drop out, and so do accented letters, since only ascii letters survive.
/// Pieces that strip down to nothing are discarded. The iterator is lazy:
/// nothing is produced until the caller pulls.
pub fn words(fragment: &str) -> impl Iterator<Item = String> + '_ {
    fragment.split_whitespace().filter_map(normalize)
}

fn normalize(piece: &str) -> Option<String> {
    let word: String = piece
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();
    if word.is_empty() { None } else { Some(word) }
}
