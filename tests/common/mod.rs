//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets a [`ContentTree`]: a fresh temporary directory populated
//! with a small markdown tree, so tests never depend on checked-in content or
//! on each other's state. The default tree exercises the interesting shapes:
//! a root page, a nested section with its own `index.md`, meta markers,
//! marker-less pages, and a title/body split for ranking tests.

use std::path::{Path, PathBuf};

use rstest::fixture;
use tempfile::TempDir;

/// A temporary content directory that cleans itself up on drop.
pub struct ContentTree {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl ContentTree {
    /// Creates an empty content tree.
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("failed to create temp content dir");
        let root = temp.path().join("content");
        std::fs::create_dir(&root).expect("failed to create content root");
        Self { _temp: temp, root }
    }

    /// The content root, suitable for `Documentation::new`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a page at `rel` (relative to the root), creating parent
    /// directories as needed.
    pub fn write_page(&self, rel: &str, content: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create section dir");
        }
        std::fs::write(&path, content).expect("failed to write page");
        self
    }
}

/// The default tree used by most integration tests.
///
/// Layout:
/// - `index.md` — root page, title "Home", mentions databases only in body
/// - `notes.txt` — non-markdown, must be ignored
/// - `api/index.md` — section landing page
/// - `api/database.md` — title contains "Database"
/// - `api/streams.md` — no markers, fallback description
#[fixture]
pub fn content_tree() -> ContentTree {
    let tree = ContentTree::empty();

    tree.write_page(
        "index.md",
        "[meta:title]: <> (Home)\n[meta:description]: <> (Start here)\n\nWe mention a database in passing.\n",
    );
    tree.write_page("notes.txt", "not markdown, not cataloged\n");
    tree.write_page(
        "api/index.md",
        "[meta:title]: <> (API Reference)\n\nEverything the api exposes.\n",
    );
    tree.write_page(
        "api/database.md",
        "[meta:title]: <> (Database Guide)\n\nConnecting and querying.\n",
    );
    tree.write_page(
        "api/streams.md",
        "Streams are everywhere.\nThey compose well.\n\nMore stream details below.\n",
    );

    tree
}
