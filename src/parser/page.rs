//! Reference page parser: line-by-line state machine.
//!
//! A page looks like:
//!
//! ````text
//! # String
//! ## `contains` *substring* *string*
//! `contains` returns whether *substring* is in *string*.
//! ```text
//! {{ "abc" | contains "ab" }}
//!
//! true
//! ```
//! ````
//!
//! Every `## ` header opens a section that is committed when the next header
//! arrives or the input ends. Fence lines toggle between body and example
//! collection; there is no nesting.

use crate::error::ParseError;
use crate::model::{Page, Reference};
use crate::parser::name::function_name;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_PAGE_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(\S+)").unwrap());

static RE_SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s(.*)$").unwrap());

const FENCE: &str = "```";

// -- Parser state -------------------------------------------------------------

/// The section opened by the most recent header.
#[derive(Default)]
struct Section {
    title: String,
    /// 1-based line number of the header
    line: usize,
    /// Set when a fence opens
    body: Option<String>,
    /// Set when a fence closes
    example: Option<String>,
}

#[derive(Default)]
struct ParserState {
    category: String,
    references: HashMap<String, Reference>,

    section: Option<Section>,
    in_example: bool,

    body: String,
    example: String,
}

// -- Public API ---------------------------------------------------------------

/// Parse one reference page into its category and references.
pub fn parse_page(input: &str) -> Result<Page, ParseError> {
    let mut lines = input.lines();
    let first = lines.next().unwrap_or_default();
    let category = RE_PAGE_TITLE
        .captures(first)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ParseError::MissingPageTitle {
            found: first.to_string(),
        })?;

    let mut state = ParserState {
        category,
        ..Default::default()
    };

    // Line 1 was the page title.
    for (idx, line) in lines.enumerate() {
        process_line(&mut state, idx + 2, line)?;
    }

    commit(&mut state)?;

    Ok(Page {
        category: state.category,
        references: state.references,
    })
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, number: usize, line: &str) -> Result<(), ParseError> {
    // 1. Section header
    if let Some(caps) = RE_SECTION.captures(line) {
        commit(s)?;
        s.section = Some(Section {
            title: caps[1].to_string(),
            line: number,
            ..Default::default()
        });
        return Ok(());
    }

    // 2. Fence toggle
    if line.starts_with(FENCE) {
        if s.in_example {
            s.example.push_str(line);
            s.example.push('\n');
            let example = s.example.trim().to_string();
            s.example.clear();
            if let Some(section) = s.section.as_mut() {
                section.example = Some(example);
            }
        } else {
            let body = s.body.trim().to_string();
            s.body.clear();
            if let Some(section) = s.section.as_mut() {
                section.body = Some(body);
            }
            s.example.push_str(line);
            s.example.push('\n');
        }
        s.in_example = !s.in_example;
        return Ok(());
    }

    // 3. Inside a fence
    if s.in_example {
        s.example.push_str(line);
        s.example.push('\n');
        return Ok(());
    }

    // 4. Section body; 5. nothing open yet, discard
    if s.section.is_some() {
        s.body.push_str(line);
        s.body.push('\n');
    }

    Ok(())
}

/// Commit the open section (if any) and reset all buffers.
///
/// `body` is only ever flushed by an opening fence, so a section without one
/// commits an empty body. An unterminated fence leaves `example` at whatever
/// the last closing fence flushed; the trailing content is dropped.
fn commit(s: &mut ParserState) -> Result<(), ParseError> {
    s.body.clear();
    s.example.clear();
    s.in_example = false;

    let Some(section) = s.section.take() else {
        return Ok(());
    };

    let name = function_name(&section.title)
        .ok_or_else(|| ParseError::MissingFunctionName {
            line: section.line,
            header: section.title.clone(),
        })?
        .to_string();

    s.references.insert(
        name,
        Reference {
            category: Some(s.category.clone()),
            title: section.title,
            body: section.body.unwrap_or_default(),
            example: section.example,
        },
    );

    Ok(())
}
