//! Markdown entity normalization pipeline - the ONE canonical implementation
//!
//! Preconditions a markdown string so that a downstream entity parser never
//! walks either of its two crash-prone diagnostic paths:
//!
//! 1. Terminate malformed legacy references (`60&nbspkm/h` → `60&nbsp;km/h`)
//! 2. Escape terminated-but-unknown references (`&foo;` → `&amp;foo;`)
//!
//! Pass order matters: Pass 1 may mint new terminated references (always
//! legacy, therefore always known), and Pass 2 must judge the text in its
//! final terminated shape. Everything the passes do not match - bare
//! ampersands, numeric references, unterminated unknown names - is defined
//! safe and passes through byte-identical.
//!
//! The whole pipeline is pure: no I/O, no shared mutable state beyond the
//! lazily built read-only tables and regexes, the same input always yields
//! the same output, and a second application leaves normalized text
//! unchanged.
//!
//! # Usage
//!
//! ```rust
//! use markdown_entity_guard::normalize_entities;
//!
//! let fixed = normalize_entities("_An ambulance travelling at 60&nbspkm/h..._");
//! assert_eq!(fixed, "_An ambulance travelling at 60&nbsp;km/h..._");
//! ```
//!
//! ## Custom configuration
//!
//! ```rust
//! use markdown_entity_guard::{normalize_entities_with_options, NormalizeOptions};
//!
//! // Only the termination pass has been confirmed against the live defect;
//! // a caller can run it alone.
//! let options = NormalizeOptions {
//!     terminate_legacy: true,
//!     escape_unknown: false,
//! };
//! let fixed = normalize_entities_with_options("a &foo; b&middotc", &options);
//! assert_eq!(fixed, "a &foo; b&middot;c");
//! ```

pub mod legacy_termination;
pub mod unknown_escaping;

pub use legacy_termination::terminate_legacy_entities;
pub use unknown_escaping::escape_unknown_entities;

/// Configuration options for entity normalization
///
/// Both passes default to on. The split exists because the two passes defuse
/// two different diagnostics: the termination pass is verified against the
/// live renderer defect, while the escaping pass is verified against the
/// parser's documented behavior only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Insert the missing `;` after unterminated legacy references
    /// (default: true)
    pub terminate_legacy: bool,

    /// Rewrite `&` to `&amp;` in terminated references whose name is not a
    /// valid HTML5 entity (default: true)
    pub escape_unknown: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            terminate_legacy: true,
            escape_unknown: true,
        }
    }
}

/// Normalize HTML named-character-references in markdown with both passes
/// enabled.
///
/// Total function: accepts any string, never fails, returns a string of the
/// same semantic content that is safe to hand to the downstream renderer.
#[must_use]
pub fn normalize_entities(markdown: &str) -> String {
    normalize_entities_with_options(markdown, &NormalizeOptions::default())
}

/// Normalize HTML named-character-references with explicit pass selection.
#[must_use]
pub fn normalize_entities_with_options(markdown: &str, options: &NormalizeOptions) -> String {
    // Fast path: no ampersand means no reference of any shape.
    if !markdown.contains('&') {
        return markdown.to_string();
    }

    let mut result = if options.terminate_legacy {
        terminate_legacy_entities(markdown)
    } else {
        markdown.to_string()
    };

    if options.escape_unknown {
        result = escape_unknown_entities(&result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_passes_compose() {
        assert_eq!(
            normalize_entities("60&nbspkm/h and &bogus; text"),
            "60&nbsp;km/h and &amp;bogus; text"
        );
    }

    #[test]
    fn test_pass_one_output_survives_pass_two() {
        // Pass 1 terminates &amp to &amp; which Pass 2 must recognize as a
        // known name rather than re-escaping it.
        assert_eq!(normalize_entities("fish &amp chips"), "fish &amp; chips");
    }

    #[test]
    fn test_termination_only() {
        let options = NormalizeOptions {
            terminate_legacy: true,
            escape_unknown: false,
        };
        assert_eq!(
            normalize_entities_with_options("a&middotb and &foo;", &options),
            "a&middot;b and &foo;"
        );
    }

    #[test]
    fn test_escaping_only() {
        let options = NormalizeOptions {
            terminate_legacy: false,
            escape_unknown: true,
        };
        assert_eq!(
            normalize_entities_with_options("a&middotb and &foo;", &options),
            "a&middotb and &amp;foo;"
        );
    }

    #[test]
    fn test_no_ampersand_fast_path() {
        assert_eq!(normalize_entities("plain text"), "plain text");
        assert_eq!(normalize_entities(""), "");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let cases = [
            "60&nbspkm/h",
            "a &foo; bar",
            "fish &amp chips",
            "foo &nbsp; bar &#160; &#x00A0;",
            "a && b & c",
        ];
        for case in cases {
            let once = normalize_entities(case);
            assert_eq!(normalize_entities(&once), once, "not idempotent for {case:?}");
        }
    }
}
