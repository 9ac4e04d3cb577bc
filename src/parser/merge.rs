//! Cross-page merge: combine parsed pages into one name → reference map.
//!
//! Pages are applied in load order and a later page silently replaces an
//! earlier page's entry of the same name.

use crate::model::*;
use std::collections::HashMap;

/// Merge pages in the given order, last write wins.
pub fn merge<I>(pages: I) -> HashMap<String, Reference>
where
    I: IntoIterator<Item = Page>,
{
    let mut merged: HashMap<String, Reference> = HashMap::new();

    for page in pages {
        for (name, reference) in page.references {
            if let Some(previous) = merged.insert(name.clone(), reference) {
                tracing::trace!(
                    name = %name,
                    category = previous.category.as_deref().unwrap_or_default(),
                    replaced_by = %page.category,
                    "reference overridden by later page"
                );
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn page(category: &str, entries: &[(&str, &str)]) -> Page {
        Page {
            category: category.to_string(),
            references: entries
                .iter()
                .map(|(name, body)| {
                    (
                        name.to_string(),
                        Reference {
                            category: Some(category.to_string()),
                            title: format!("`{}`", name),
                            body: body.to_string(),
                            example: None,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn merge_disjoint_pages() {
        let merged = merge(vec![
            page("Boolean", &[("eqFold", "compare")]),
            page("String", &[("contains", "search"), ("quote", "quote")]),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["eqFold"].category.as_deref(), Some("Boolean"));
        assert_eq!(merged["quote"].body, "quote");
    }

    #[test]
    fn later_page_wins() {
        let merged = merge(vec![
            page("Conversion", &[("toJSON", "from conversion")]),
            page("Encoding", &[("toJSON", "from encoding")]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["toJSON"].body, "from encoding");
        assert_eq!(merged["toJSON"].category.as_deref(), Some("Encoding"));
    }

    #[test]
    fn order_decides_winner() {
        let merged = merge(vec![
            page("Encoding", &[("toJSON", "from encoding")]),
            page("Conversion", &[("toJSON", "from conversion")]),
        ]);
        assert_eq!(merged["toJSON"].body, "from conversion");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn override_trace_names_function() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            merge(vec![
                page("Conversion", &[("toJSON", "from conversion")]),
                page("Encoding", &[("toJSON", "from encoding"), ("hexEncode", "hex")]),
            ])
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("reference overridden by later page"), "{}", output);
        assert!(output.contains("name=toJSON"), "{}", output);
        assert!(!output.contains("name=hexEncode"), "{}", output);
    }

    #[test]
    fn merge_nothing() {
        assert!(merge(Vec::new()).is_empty());
        assert!(merge(vec![page("Empty", &[])]).is_empty());
    }
}
