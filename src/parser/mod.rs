//! Parser module: page parsing, name extraction, cross-page merge.

pub mod merge;
pub mod name;
pub mod page;

use crate::model::{Page, Resource};
use anyhow::{Context, Result};

/// Parse a loaded resource, attaching its name to any error.
pub fn parse_resource(resource: &Resource) -> Result<Page> {
    let page = page::parse_page(&resource.content)
        .with_context(|| format!("failed to parse page {}", resource.name))?;
    tracing::debug!(
        resource = %resource.name,
        category = %page.category,
        entries = page.references.len(),
        "parsed reference page"
    );
    Ok(page)
}
