//! Full-text search infrastructure for the documentation index.
//!
//! This module provides the keyword-extraction and search pipeline:
//! tokenization, single-document TF-IDF term scoring, tag extraction, and a
//! field-weighted inverted index over document titles and bodies.

// Module declarations
pub(crate) mod index;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use index::{IndexEntry, SearchHit, SearchIndex};
pub use scoring::{TermScore, score, tags};
pub use tokenize::tokenize;
