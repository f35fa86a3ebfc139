//! Table-of-contents construction over a content directory tree.
//!
//! The walkers mirror each other: [`walk_sync`] for blocking callers and
//! [`walk`] for async ones, both producing the same [`Toc`] for the same
//! tree. Only `.md` files are cataloged; the root directory is recorded under
//! the sentinel section `"index"`, subdirectories under their basename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use futures::future::BoxFuture;
use serde::Serialize;

use crate::error::Result;
use crate::meta;

/// Catalog entry for a single page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageInfo {
    /// Site-relative link: `/` for root pages, `/<dir>/<page>/` otherwise.
    pub href: String,
    pub title: String,
    pub description: String,
    /// Directory the page was found in.
    pub path: PathBuf,
}

/// Hierarchical table of contents: section -> page -> metadata.
///
/// Sorted maps keep iteration order deterministic regardless of the order the
/// file system yields entries in.
pub type Toc = BTreeMap<String, BTreeMap<String, PageInfo>>;

/// Section name under which the content root's own pages are cataloged.
pub(crate) const ROOT_SECTION: &str = "index";

/// Builds the page link for `page` found in `dir`.
///
/// Root pages all live at `/`; a subdirectory's `index` page links to the
/// directory itself.
fn href(dir: &Path, page: &str, sub: bool) -> String {
    if !sub {
        return "/".to_string();
    }

    let dir_name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if page == ROOT_SECTION {
        format!("/{dir_name}/")
    } else {
        format!("/{dir_name}/{page}/")
    }
}

fn page_info(dir: &Path, page: &str, sub: bool, content: &str) -> PageInfo {
    let record = meta::build(content);
    PageInfo {
        href: href(dir, page, sub),
        title: record.title,
        description: record.description,
        path: dir.to_path_buf(),
    }
}

/// Walks `dir` synchronously and returns its table of contents.
///
/// The first failed read aborts the walk; no partial catalog is returned.
pub fn walk_sync(dir: &Path) -> Result<Toc> {
    let mut toc = Toc::new();
    walk_dir_sync(dir, ROOT_SECTION.to_string(), false, &mut toc)?;
    tracing::debug!("cataloged {} sections under {}", toc.len(), dir.display());
    Ok(toc)
}

fn walk_dir_sync(dir: &Path, current: String, sub: bool, toc: &mut Toc) -> Result<()> {
    toc.entry(current.clone()).or_default();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read content directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to list directory {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            let section = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            walk_dir_sync(&path, section, true, toc)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let page = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read page {}", path.display()))?;

            toc.entry(current.clone())
                .or_default()
                .insert(page.clone(), page_info(dir, &page, sub, &content));
        }
    }

    Ok(())
}

/// Walks `dir` asynchronously and returns its table of contents.
///
/// Produces the same result as [`walk_sync`] for the same tree, reading
/// through `tokio::fs` instead. The first failed read aborts the walk.
pub async fn walk(dir: &Path) -> Result<Toc> {
    let mut toc = Toc::new();
    walk_dir(dir, ROOT_SECTION.to_string(), false, &mut toc).await?;
    tracing::debug!("cataloged {} sections under {}", toc.len(), dir.display());
    Ok(toc)
}

// Async recursion needs the boxed indirection.
fn walk_dir<'a>(
    dir: &'a Path,
    current: String,
    sub: bool,
    toc: &'a mut Toc,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        toc.entry(current.clone()).or_default();

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("failed to read content directory {}", dir.display()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("failed to list directory {}", dir.display()))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .with_context(|| format!("failed to stat {}", path.display()))?;

            if file_type.is_dir() {
                let section = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                walk_dir(&path, section, true, toc).await?;
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let page = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read page {}", path.display()))?;

                toc.entry(current.clone())
                    .or_default()
                    .insert(page.clone(), page_info(dir, &page, sub, &content));
            }
        }

        Ok(())
    })
}
