//! Field-weighted inverted index for full-text document search.

use ahash::AHashMap;
use serde::Serialize;

use super::tokenize::{hash_term, tokenize};

/// Term hash for fast lookup
type TermHash = u64;

/// Boost applied to terms found in a document's title.
const TITLE_BOOST: f64 = 10.0;
/// Boost applied to terms found in a document's body.
const BODY_BOOST: f64 = 1.0;

/// A document handed to the index: composite id plus the two indexed fields.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Composite path key, e.g. `"section/page"`.
    pub id: String,
    pub title: String,
    pub body: String,
}

/// A ranked search result pointing back at an indexed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// The id of the matched [`IndexEntry`].
    #[serde(rename = "ref")]
    pub ref_id: String,
    pub score: f64,
}

/// An inverted index over a two-field document schema.
///
/// The schema is fixed at construction: `title` matches are boosted 10x over
/// `body` matches. Entries may be added incrementally; re-adding an id
/// replaces the previous entry. Queries are read-only and deterministic for a
/// fixed index state.
#[derive(Debug)]
pub struct SearchIndex {
    title_boost: f64,
    body_boost: f64,
    /// Map from term hash to postings: doc slot -> accumulated field score.
    postings: AHashMap<TermHash, AHashMap<usize, f64>>,
    /// Map from doc slot to entry id.
    refs: Vec<String>,
    /// Map from entry id to doc slot.
    slots: AHashMap<String, usize>,
    /// Term hashes indexed per doc slot, kept so re-adds can drop old postings.
    doc_terms: Vec<Vec<TermHash>>,
}

impl SearchIndex {
    /// Create an empty index with the default title/body schema.
    pub fn new() -> Self {
        Self::with_boosts(TITLE_BOOST, BODY_BOOST)
    }

    /// Create an empty index with explicit field boosts.
    pub fn with_boosts(title_boost: f64, body_boost: f64) -> Self {
        Self {
            title_boost,
            body_boost,
            postings: AHashMap::new(),
            refs: Vec::new(),
            slots: AHashMap::new(),
            doc_terms: Vec::new(),
        }
    }

    /// Inserts or replaces `entry` under its id.
    ///
    /// Both fields are lowercased and tokenized; each term scores its raw
    /// frequency times the field boost, summed across fields.
    pub fn add(&mut self, entry: IndexEntry) {
        let slot = match self.slots.get(&entry.id) {
            Some(&slot) => {
                self.remove_postings(slot);
                slot
            }
            None => {
                let slot = self.refs.len();
                self.refs.push(entry.id.clone());
                self.slots.insert(entry.id, slot);
                self.doc_terms.push(Vec::new());
                slot
            }
        };

        let mut scores: AHashMap<TermHash, f64> = AHashMap::new();
        score_field(&entry.title, self.title_boost, &mut scores);
        score_field(&entry.body, self.body_boost, &mut scores);

        let mut terms = Vec::with_capacity(scores.len());
        for (hash, score) in scores {
            self.postings.entry(hash).or_default().insert(slot, score);
            terms.push(hash);
        }
        self.doc_terms[slot] = terms;
    }

    /// Searches the index, returning hits ranked by combined relevance.
    ///
    /// The query is lowercased and tokenized like indexed fields; per-token
    /// scores are summed for documents matching several tokens. Results are
    /// sorted descending by score, with ascending id as the tie-break so a
    /// fixed index state always ranks identically. An empty query or a query
    /// of unknown terms yields an empty vec, never an error.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.to_lowercase();
        let tokens = tokenize(&query);

        if tokens.is_empty() {
            return vec![];
        }

        let mut combined: AHashMap<usize, f64> = AHashMap::new();
        for token in &tokens {
            if let Some(postings) = self.postings.get(&hash_term(token)) {
                for (&slot, &score) in postings {
                    *combined.entry(slot).or_insert(0.0) += score;
                }
            }
        }

        let mut hits: Vec<SearchHit> = combined
            .into_iter()
            .map(|(slot, score)| SearchHit {
                ref_id: self.refs[slot].clone(),
                score,
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.ref_id.cmp(&b.ref_id))
        });

        hits
    }

    /// Get the number of unique terms in the index
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Get the number of documents in the index
    pub fn document_count(&self) -> usize {
        self.refs.len()
    }

    /// Drop every posting pointing at `slot` ahead of a replacement add.
    fn remove_postings(&mut self, slot: usize) {
        for hash in self.doc_terms[slot].drain(..) {
            if let Some(postings) = self.postings.get_mut(&hash) {
                postings.remove(&slot);
                if postings.is_empty() {
                    self.postings.remove(&hash);
                }
            }
        }
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulate `text`'s term frequencies into `scores`, weighted by `boost`.
fn score_field(text: &str, boost: f64, scores: &mut AHashMap<TermHash, f64>) {
    let text = text.to_lowercase();
    for token in tokenize(&text) {
        *scores.entry(hash_term(token)).or_insert(0.0) += boost;
    }
}
