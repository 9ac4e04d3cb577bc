//! Data model for extracted function references.

use std::collections::HashMap;

/// One documented template function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    /// Category declared by the page title (`# String` → "String").
    pub category: Option<String>,
    /// Header text without the `## ` marker, e.g. "`contains` *substring* *string*"
    pub title: String,
    /// Description, trimmed
    pub body: String,
    /// Fenced example including its fence lines, trimmed
    pub example: Option<String>,
}

/// A single parsed page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub category: String,
    pub references: HashMap<String, Reference>,
}

/// A raw markdown resource before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// File name, e.g. "string.md". Determines load order.
    pub name: String,
    pub content: String,
}
