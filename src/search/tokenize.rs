//! Text tokenization utilities for scoring and search indexing.

use ahash::AHasher;
use std::hash::{Hash, Hasher};

/// Splits text into word tokens on non-alphanumeric boundaries.
///
/// Tokens are borrowed slices of the input, emitted in left-to-right order.
/// No stemming, no case folding, no filtering beyond dropping empty splits;
/// callers that need normalized terms lowercase the text before tokenizing.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Hashes a term for fast posting-list lookup.
///
/// Callers pass already-lowercased terms, so no extra folding happens here.
pub(crate) fn hash_term(term: &str) -> u64 {
    let mut hasher = AHasher::default();
    term.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("getting started", vec!["getting", "started"])]
    #[case("install the package!", vec!["install", "the", "package"])]
    #[case("node.js streams", vec!["node", "js", "streams"])]
    #[case("a--b__c", vec!["a", "b", "c"])]
    #[case("http2 server", vec!["http2", "server"])]
    fn test_tokenize_order_preserved(#[case] input: &str, #[case] expected: Vec<&str>) {
        check!(tokenize(input) == expected);
    }

    #[test]
    fn test_empty_and_whitespace() {
        check!(tokenize("").is_empty());
        check!(tokenize("   ").is_empty());
        check!(tokenize("\n\t...").is_empty());
    }

    #[rstest]
    #[case("Москва река")] // Cyrillic is alphanumeric, kept whole
    #[case("日本")]
    #[case("🦀 crab")]
    fn test_unicode_handling(#[case] input: &str) {
        // Should not panic, regardless of script
        let _tokens = tokenize(input);
    }

    #[test]
    fn test_deterministic() {
        let text = "the same text, twice over";
        check!(tokenize(text) == tokenize(text));
    }

    #[test]
    fn test_hash_is_stable() {
        check!(hash_term("database") == hash_term("database"));
        check!(hash_term("database") != hash_term("databases"));
    }
}
