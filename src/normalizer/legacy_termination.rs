//! Pass 1: terminate malformed legacy entity references.
//!
//! HTML entity parsers prefix-match the legacy named references even when no
//! semicolon follows, so `60&nbspkm/h` is read as the entity `nbsp` plus the
//! literal text `km/h` - and the parser emits a "named, not terminated"
//! diagnostic on the way. In the renderer this crate preconditions input for,
//! constructing that diagnostic crashes. Supplying the missing semicolon
//! makes the reference well-formed and the diagnostic never fires.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::entities::LEGACY_ENTITY_NAMES;

/// Matches `&` + a legacy entity name + an optional `;`.
///
/// The alternation is built from [`LEGACY_ENTITY_NAMES`] sorted
/// length-descending: alternation matching is leftmost-first, so a shorter
/// name that prefixes a longer one would otherwise always win. The trailing
/// `(;?)` capture is how already-terminated references are told apart - the
/// replacement closure passes them through untouched. Keeping the pattern
/// lookahead-free keeps it inside the regex crate's finite-automaton engine,
/// which runs in time linear in the input no matter how ampersand-dense the
/// text is.
static UNTERMINATED_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = LEGACY_ENTITY_NAMES.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let pattern = format!("&({})(;?)", names.join("|"));
    Regex::new(&pattern).expect("UNTERMINATED_LEGACY: hardcoded regex is valid")
});

/// Insert the missing `;` after every unterminated legacy reference.
///
/// The semicolon goes in right after the matched name regardless of what
/// follows, because that is exactly where the downstream parser stops its
/// own prefix match: `60&nbspkm/h` becomes `60&nbsp;km/h`, with `km/h` left
/// as literal text. Names outside the legacy table (`&mdash`, `&hellip`,
/// `&foo`) are not touched - unterminated, they parse as plain text and are
/// already safe.
pub fn terminate_legacy_entities(markdown: &str) -> String {
    // Fast path: no ampersand, nothing to terminate.
    if !markdown.contains('&') {
        return markdown.to_string();
    }

    let mut inserted = 0usize;
    let result = UNTERMINATED_LEGACY.replace_all(markdown, |caps: &Captures| {
        if caps[2].is_empty() {
            inserted += 1;
            format!("&{};", &caps[1])
        } else {
            caps[0].to_string()
        }
    });
    if inserted > 0 {
        tracing::debug!(inserted, "terminated unterminated legacy entity references");
    }
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_semicolon_mid_word() {
        assert_eq!(
            terminate_legacy_entities("travelling at 60&nbspkm/h"),
            "travelling at 60&nbsp;km/h"
        );
        assert_eq!(terminate_legacy_entities("a&middotb"), "a&middot;b");
    }

    #[test]
    fn test_inserts_semicolon_at_end_of_input() {
        assert_eq!(terminate_legacy_entities("fish &amp"), "fish &amp;");
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(terminate_legacy_entities("1&lt2"), "1&lt;2");
        assert_eq!(terminate_legacy_entities("2&gt1"), "2&gt;1");
    }

    #[test]
    fn test_already_terminated_is_untouched() {
        assert_eq!(terminate_legacy_entities("foo &nbsp; bar"), "foo &nbsp; bar");
        assert_eq!(terminate_legacy_entities("fish &amp; chips"), "fish &amp; chips");
    }

    #[test]
    fn test_non_legacy_names_are_untouched() {
        // mdash/ndash/hellip are modern-only names; unterminated they are
        // plain text to the downstream parser and must stay as written.
        assert_eq!(terminate_legacy_entities("yes&mdashno"), "yes&mdashno");
        assert_eq!(terminate_legacy_entities("yes&ndashno"), "yes&ndashno");
        assert_eq!(terminate_legacy_entities("wait&hellip"), "wait&hellip");
    }

    #[test]
    fn test_unknown_names_are_untouched() {
        assert_eq!(terminate_legacy_entities("a &foo bar"), "a &foo bar");
    }

    #[test]
    fn test_bare_and_doubled_ampersands() {
        assert_eq!(terminate_legacy_entities("a && b"), "a && b");
        assert_eq!(terminate_legacy_entities("a & b"), "a & b");
        assert_eq!(terminate_legacy_entities("&"), "&");
    }

    #[test]
    fn test_ampersand_heavy_input_is_returned_unchanged() {
        // Long runs of bare ampersands are valid markdown; they must come
        // back unchanged, and getting there must not blow any engine limit.
        let input = "&".repeat(10_000);
        assert_eq!(terminate_legacy_entities(&input), input);

        let interleaved = "& ".repeat(10_000);
        assert_eq!(terminate_legacy_entities(&interleaved), interleaved);
    }

    #[test]
    fn test_numeric_references_are_untouched() {
        assert_eq!(terminate_legacy_entities("foo&#160;bar"), "foo&#160;bar");
        assert_eq!(terminate_legacy_entities("foo&#x00A0;bar"), "foo&#x00A0;bar");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(
            terminate_legacy_entities("60&nbspkm/h and a&middotb"),
            "60&nbsp;km/h and a&middot;b"
        );
    }

    #[test]
    fn test_case_sensitive_matching() {
        // The legacy table carries both cases where HTML does (AMP vs amp);
        // names with only one casing must not match the other.
        assert_eq!(terminate_legacy_entities("x&AMPy"), "x&AMP;y");
        assert_eq!(terminate_legacy_entities("x&NBSPy"), "x&NBSPy");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(terminate_legacy_entities(""), "");
    }
}
