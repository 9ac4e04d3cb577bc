//! funcref: structured reference docs for template helper functions.
//!
//! Reference pages are markdown files, one per function category:
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
//! [`Registry::build`] loads the pages from a [`Source`], parses each one and
//! merges them into a single name → [`Reference`] map. Pages are applied in
//! file-name order, so a later page replaces an earlier page's entry of the
//! same name.
//!
//! ```no_run
//! let registry = funcref::Registry::embedded()?;
//! if let Some(reference) = registry.get("contains") {
//!     println!("{}\n\n{}", reference.title, reference.body);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod source;

pub use error::ParseError;
pub use model::{Page, Reference, Resource};
pub use parser::page::parse_page;
pub use registry::Registry;
pub use source::Source;
