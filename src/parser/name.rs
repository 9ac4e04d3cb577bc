//! Function name extraction from section headers.

use regex::Regex;
use std::sync::LazyLock;

// Template function names start with a letter or underscore and continue
// with letters, digits or underscores.
static RE_FUNC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([a-zA-Z_][a-zA-Z0-9_]*)`").unwrap());

/// Return the first backtick-quoted identifier in `header`.
///
/// `` `quote` *string*... `` → `quote`. Tokens that are not identifiers
/// (`` `{{ x }}` ``) are skipped.
pub fn function_name(header: &str) -> Option<&str> {
    RE_FUNC_NAME
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        assert_eq!(
            function_name("`contains` *substring* *string*"),
            Some("contains")
        );
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(function_name("`join` *delimiter* `list`"), Some("join"));
    }

    #[test]
    fn skips_non_identifier_tokens() {
        assert_eq!(function_name("`1st` then `eqFold`"), Some("eqFold"));
        assert_eq!(function_name("`a-b` `_private`"), Some("_private"));
    }

    #[test]
    fn variadic_marker() {
        assert_eq!(
            function_name("`eqFold` *string1* *string2* [*extraString*...]"),
            Some("eqFold")
        );
    }

    #[test]
    fn digits_after_first_char() {
        assert_eq!(function_name("`hex2` *s*"), Some("hex2"));
    }

    #[test]
    fn no_token() {
        assert_eq!(function_name("contains *substring*"), None);
        assert_eq!(function_name("``"), None);
    }
}
