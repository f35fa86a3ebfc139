//! Term importance scoring and tag extraction.
//!
//! Terms are ranked with a TF-IDF formula evaluated against a corpus holding
//! exactly one document: the content being scored. A fresh corpus is built on
//! every call, so the IDF factor is a constant and the score is driven by
//! in-document term frequency. This "score against this document alone"
//! behavior is the contract; do not widen it to a shared corpus.

use ahash::{AHashMap, AHashSet};

use super::tokenize::tokenize;

/// Tags shorter than this are noise and never scored.
const MIN_TERM_LENGTH: usize = 3;

/// A scored term from a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

/// Term-frequency corpus for TF-IDF scoring.
///
/// `score` rebuilds this per call with a single document; the formula stays in
/// its general form so the collapse to raw frequency is visible, not baked in.
#[derive(Default)]
struct Corpus {
    docs: Vec<AHashMap<String, usize>>,
}

impl Corpus {
    fn add_document(&mut self, text: &str) {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        for token in tokenize(text) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        self.docs.push(counts);
    }

    /// TF-IDF = tf * (ln(doc_count / doc_freq) + 1).
    ///
    /// With a single registered document this is the raw term frequency for
    /// present terms and 0.0 for absent ones.
    fn tf_idf(&self, term: &str, doc: usize) -> f64 {
        let tf = self
            .docs
            .get(doc)
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0) as f64;
        let doc_freq = self
            .docs
            .iter()
            .filter(|counts| counts.contains_key(term))
            .count()
            .max(1) as f64;
        let idf = (self.docs.len() as f64 / doc_freq).ln() + 1.0;
        tf * idf
    }
}

/// True for tokens that read as a nonzero number ("42", "1e5").
///
/// "0" and friends fall through to the length filter instead, and words that
/// merely parse as float specials ("infinity") are not numbers here.
fn is_nonzero_number(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token.parse::<f64>().is_ok_and(|n| n != 0.0)
}

/// Scores every qualifying distinct term of `content` against the content
/// itself, in first-occurrence order.
///
/// Tokens are dropped when they read as a nonzero number, are shorter than
/// three characters, or already appeared earlier in this call (first
/// occurrence wins; duplicates are not re-scored). Empty content yields an
/// empty vec.
pub fn score(content: &str) -> Vec<TermScore> {
    if content.is_empty() {
        return vec![];
    }

    let content = content.to_lowercase();

    let mut corpus = Corpus::default();
    corpus.add_document(&content);

    let mut processed: AHashSet<&str> = AHashSet::new();
    let mut words = vec![];

    for word in tokenize(&content) {
        if is_nonzero_number(word) || word.chars().count() < MIN_TERM_LENGTH {
            continue;
        }
        // first occurrence wins; later duplicates are dropped
        if !processed.insert(word) {
            continue;
        }

        words.push(TermScore {
            term: word.to_string(),
            score: corpus.tf_idf(word, 0),
        });
    }

    words
}

/// Returns the `n` highest-scoring terms of `content` as representative tags.
///
/// The sort is stable and descending by score, so equal-score terms keep their
/// first-seen order. Empty content yields an empty vec.
pub fn tags(content: &str, n: usize) -> Vec<String> {
    if content.is_empty() {
        return vec![];
    }

    let mut scored = score(content);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    scored.into_iter().map(|term| term.term).collect()
}
