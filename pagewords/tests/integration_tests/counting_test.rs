// tests/integration_tests/counting_test.rs
use super::common::FOX_PAGE;
use pagewords::{count_fragments, text_fragments, words};

#[test]
fn test_fox_page_counts() {
    let fragments = text_fragments(FOX_PAGE);
    let frequencies = count_fragments(&fragments);

    assert_eq!(frequencies.count("the"), 3);
    assert_eq!(frequencies.count("fox"), 3);
    assert_eq!(frequencies.count("quick"), 1);
    assert_eq!(frequencies.count("lazy"), 1);
    assert_eq!(frequencies.count("jumps"), 1);
    assert_eq!(frequencies.distinct(), 5, "Five distinct words on the page");
}

#[test]
fn test_counts_conserve_extracted_tokens() {
    let fragments = text_fragments(FOX_PAGE);
    let token_total: usize = fragments
        .iter()
        .map(|fragment| words(fragment).count())
        .sum();

    let frequencies = count_fragments(&fragments);
    let count_total: u64 = frequencies.counts.values().sum();

    assert_eq!(token_total, 9, "The fox page carries nine tokens");
    assert_eq!(
        count_total, token_total as u64,
        "Summed counts should equal the tokens extracted from the page"
    );
}

#[test]
fn test_distinct_words_match_count_keys() {
    let frequencies = count_fragments(text_fragments(FOX_PAGE));

    let mut listed: Vec<&String> = frequencies.words.iter().collect();
    let mut keyed: Vec<&String> = frequencies.counts.keys().collect();
    listed.sort();
    keyed.sort();

    assert_eq!(
        listed, keyed,
        "The distinct-word list and the count keys should be the same set"
    );
}

#[test]
fn test_empty_page_counts_nothing() {
    let frequencies = count_fragments(text_fragments("<html><body></body></html>"));
    assert!(frequencies.is_empty());
    assert!(frequencies.counts.is_empty());
}
