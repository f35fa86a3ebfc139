//! The documentation object: one content root, one owned search index.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::{self, Toc};
use crate::error::{ReadError, Result};
use crate::meta::{self, DocumentRecord};
use crate::search::{IndexEntry, SearchHit, SearchIndex};

/// An indexed documentation tree.
///
/// Construction walks the content root once, reads every cataloged page, and
/// populates the owned [`SearchIndex`] with one entry per document. The index
/// is built exactly once and mutated by no one afterwards; queries go through
/// [`Documentation::search`] on a shared reference.
pub struct Documentation {
    root: PathBuf,
    index: SearchIndex,
}

impl Documentation {
    /// Builds the catalog and search index for the tree rooted at `root`.
    ///
    /// Each page is indexed under the composite id `"<section>/<page>"`, with
    /// the root section named `"index"`. The first failed read aborts
    /// construction; a partially indexed tree is never returned.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let start = std::time::Instant::now();
        let root = root.into();
        let toc = catalog::walk_sync(&root)?;

        let mut index = SearchIndex::new();
        for (section, pages) in &toc {
            for (page, info) in pages {
                let path = info.path.join(format!("{page}.md"));
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| ReadError::from_io(path.clone(), e))?;
                let record = meta::build(&content);

                index.add(IndexEntry {
                    id: format!("{section}/{page}"),
                    title: record.title,
                    body: record.content,
                });
            }
        }

        tracing::info!(
            "indexed {} documents ({} terms) from {} in {:?}",
            index.document_count(),
            index.term_count(),
            root.display(),
            start.elapsed()
        );

        Ok(Self { root, index })
    }

    /// The content root this documentation was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and parses a single page, blocking.
    ///
    /// `file` is resolved against the content root after normalization: an
    /// empty name means `index.md`, a trailing `/` is stripped, and the `.md`
    /// extension is appended when missing.
    pub fn get(&self, file: &str) -> Result<DocumentRecord> {
        let path = self.root.join(normalize(file));
        let content =
            std::fs::read_to_string(&path).map_err(|e| ReadError::from_io(path, e))?;
        Ok(meta::build(&content))
    }

    /// Reads and parses a single page without blocking.
    ///
    /// Same normalization and result as [`Documentation::get`]; the parse
    /// itself is shared and pure, only the read differs.
    pub async fn get_async(&self, file: &str) -> Result<DocumentRecord> {
        let path = self.root.join(normalize(file));
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ReadError::from_io(path, e))?;
        Ok(meta::build(&content))
    }

    /// Returns a fresh catalog of the content directory, blocking.
    pub fn catalog(&self) -> Result<Toc> {
        catalog::walk_sync(&self.root)
            .with_context(|| format!("failed to catalog {}", self.root.display()))
    }

    /// Returns a fresh catalog of the content directory without blocking.
    pub async fn catalog_async(&self) -> Result<Toc> {
        catalog::walk(&self.root)
            .await
            .with_context(|| format!("failed to catalog {}", self.root.display()))
    }

    /// Runs a free-text query against the owned index.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.index.search(query)
    }
}

/// Normalizes a user-supplied page name into a relative `.md` path.
fn normalize(file: &str) -> String {
    if file.is_empty() {
        return "index.md".to_string();
    }

    let mut file = file.trim_end_matches('/').to_string();

    if !file.ends_with(".md") {
        file.push_str(".md");
    }

    file
}
