//! Pass 2: escape terminated references with unknown names.
//!
//! A reference like `&foo;` is well-formed in shape but names no HTML5
//! entity. The downstream parser flags it with a "named, unknown" diagnostic
//! that the rendering pipeline does not suppress, hitting the same broken
//! diagnostic constructor as the unterminated-legacy case. Rewriting the
//! leading `&` to `&amp;` removes the construct from entity-reference
//! territory entirely; it renders as the literal text `&foo;`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::entities::is_known_entity;

/// Matches any terminated named-reference shape: `&` + letter +
/// alphanumerics + `;`. Numeric references (`&#160;`, `&#x00A0;`) start with
/// `#` and never match.
static TERMINATED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&([a-zA-Z][a-zA-Z0-9]*);")
        .expect("TERMINATED_REFERENCE: hardcoded regex is valid")
});

/// Escape the `&` of every terminated reference whose name is not a valid
/// HTML5 entity. Known names, legacy or modern, pass through byte-identical.
pub fn escape_unknown_entities(markdown: &str) -> String {
    // Fast path: no ampersand, nothing to escape.
    if !markdown.contains('&') {
        return markdown.to_string();
    }

    let mut escaped = 0usize;
    let result = TERMINATED_REFERENCE.replace_all(markdown, |caps: &Captures| {
        let name = &caps[1];
        if is_known_entity(name) {
            caps[0].to_string()
        } else {
            escaped += 1;
            format!("&amp;{name};")
        }
    });
    if escaped > 0 {
        tracing::debug!(escaped, "escaped unknown terminated entity references");
    }
    result.into_owned()
}
