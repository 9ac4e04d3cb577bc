//! Reference page sources.
//!
//! Pages are either compiled into the crate from `pages/` or read from a
//! directory on disk. Either way they come back sorted by file name, which is
//! the order [`crate::parser::merge`] applies them in.

use crate::model::Resource;
use anyhow::{bail, Context, Result};
use include_dir::{include_dir, Dir, DirEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled reference pages.
static PAGES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/pages");

/// File extension recognized as a reference page.
pub const PAGE_EXTENSION: &str = "md";

/// Where reference pages are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// Pages bundled with the crate.
    #[default]
    Embedded,
    /// `*.md` files directly inside a directory (non-recursive).
    Directory(PathBuf),
}

impl Source {
    /// Read every page, sorted by name.
    pub fn load(&self) -> Result<Vec<Resource>> {
        let mut resources = match self {
            Source::Embedded => load_embedded(&PAGES)?,
            Source::Directory(dir) => load_directory(dir)?,
        };
        resources.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(source = ?self, pages = resources.len(), "loaded reference pages");
        Ok(resources)
    }
}

fn is_page(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(PAGE_EXTENSION)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn load_embedded(dir: &Dir<'static>) -> Result<Vec<Resource>> {
    let mut resources = Vec::new();
    for entry in dir.entries() {
        let DirEntry::File(file) = entry else {
            continue;
        };
        if !is_page(file.path()) {
            continue;
        }
        let name = file_name(file.path());
        let content = file
            .contents_utf8()
            .with_context(|| format!("embedded page is not valid UTF-8: {}", name))?;
        resources.push(Resource {
            name,
            content: content.to_string(),
        });
    }
    Ok(resources)
}

fn load_directory(dir: &Path) -> Result<Vec<Resource>> {
    if !dir.is_dir() {
        bail!("page directory not found: {}", dir.display());
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        PAGE_EXTENSION
    );
    let mut resources = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        let path = entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        resources.push(Resource {
            name: file_name(&path),
            content,
        });
    }
    Ok(resources)
}
