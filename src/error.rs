//! Typed errors raised while parsing a page.

use thiserror::Error;

/// Authoring errors in a reference page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Line 1 is not of the form `# <Category>`.
    #[error("missing page title: expected `# <Category>` on line 1, found {found:?}")]
    MissingPageTitle { found: String },

    /// A `## ` header without a backtick-quoted function name.
    #[error("line {line}: section header has no `functionName` token: {header:?}")]
    MissingFunctionName { line: usize, header: String },
}
