/// Test suite for the full entity normalization pipeline.
///
/// Covers the complete behavior contract of `normalize_entities`:
/// - Unterminated legacy references gain a semicolon: `60&nbspkm/h` → `60&nbsp;km/h`
/// - Terminated unknown references are escaped: `&foo;` → `&amp;foo;`
/// - Valid references, numeric references, and bare ampersands pass through
///   byte-identical
/// - The real-world content string that motivated the filter
use markdown_entity_guard::normalize_entities;

#[test]
fn test_nbsp_missing_semicolon() {
    let input = "travelling at 60&nbspkm/h";
    let expected = "travelling at 60&nbsp;km/h";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed to terminate &nbsp");
}

#[test]
fn test_middot_missing_semicolon() {
    let input = "a&middotb";
    let expected = "a&middot;b";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed to terminate &middot");
}

#[test]
fn test_amp_missing_semicolon() {
    let input = "fish &amp chips";
    let expected = "fish &amp; chips";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed to terminate &amp");
}

#[test]
fn test_lt_gt_missing_semicolon() {
    assert_eq!(normalize_entities("1&lt2"), "1&lt;2", "Failed to terminate &lt");
    assert_eq!(normalize_entities("2&gt1"), "2&gt;1", "Failed to terminate &gt");
}

#[test]
fn test_mdash_ndash_not_legacy_unchanged() {
    // mdash/ndash are modern-only names; unterminated they parse as plain
    // text downstream and must not be touched.
    assert_eq!(normalize_entities("yes&mdashno"), "yes&mdashno");
    assert_eq!(normalize_entities("yes&ndashno"), "yes&ndashno");
}

#[test]
fn test_hellip_not_legacy_unchanged() {
    assert_eq!(normalize_entities("wait&hellip"), "wait&hellip");
}

#[test]
fn test_unknown_unterminated_unchanged() {
    assert_eq!(normalize_entities("a &foo bar"), "a &foo bar");
    assert_eq!(normalize_entities("a &random bar"), "a &random bar");
}

#[test]
fn test_unknown_terminated_escaped() {
    assert_eq!(normalize_entities("a &foo; bar"), "a &amp;foo; bar");
    assert_eq!(normalize_entities("a &random; bar"), "a &amp;random; bar");
}

#[test]
fn test_multiple_malformed_in_one_string() {
    let input = "60&nbspkm/h and a&middotb";
    let expected = "60&nbsp;km/h and a&middot;b";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed to fix multiple occurrences");
}

#[test]
fn test_already_terminated_legacy_unchanged() {
    assert_eq!(normalize_entities("foo &nbsp; bar"), "foo &nbsp; bar");
    assert_eq!(normalize_entities("a &middot; b"), "a &middot; b");
    assert_eq!(normalize_entities("fish &amp; chips"), "fish &amp; chips");
}

#[test]
fn test_terminated_modern_entity_unchanged() {
    assert_eq!(normalize_entities("yes&mdash;no"), "yes&mdash;no");
    assert_eq!(normalize_entities("wait&hellip; done"), "wait&hellip; done");
}

#[test]
fn test_numeric_references_unchanged() {
    assert_eq!(normalize_entities("foo&#160;bar"), "foo&#160;bar");
    assert_eq!(normalize_entities("foo&#x00A0;bar"), "foo&#x00A0;bar");
}

#[test]
fn test_bare_and_doubled_ampersands_unchanged() {
    assert_eq!(normalize_entities("a && b"), "a && b");
    assert_eq!(normalize_entities("R&D budget"), "R&D budget");
    assert_eq!(normalize_entities("trailing &"), "trailing &");
}

#[test]
fn test_plain_text_unchanged() {
    assert_eq!(normalize_entities("plain text"), "plain text");
}

#[test]
fn test_empty_string() {
    assert_eq!(normalize_entities(""), "");
}

#[test]
fn test_ambulance_content_string() {
    // The exact user-authored string the filter was built for.
    let input = "_An ambulance travelling at 60&nbspkm/h drives past you..._";
    let expected = "_An ambulance travelling at 60&nbsp;km/h drives past you..._";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed to fix the real-world content string");
}

#[test]
fn test_legacy_name_at_end_of_input() {
    assert_eq!(normalize_entities("price in &pound"), "price in &pound;");
}

#[test]
fn test_legacy_name_followed_by_punctuation() {
    assert_eq!(normalize_entities("(&copy 2024)"), "(&copy; 2024)");
}

#[test]
fn test_longest_legacy_name_wins() {
    // "sup1" must match over any shorter prefix; the inserted semicolon goes
    // after the full name.
    assert_eq!(normalize_entities("x&sup1y"), "x&sup1;y");
    assert_eq!(normalize_entities("a&frac12b"), "a&frac12;b");
}

#[test]
fn test_multiline_markdown_document() {
    let input = "# Speed\n\nA car at 100&nbspkm/h.\n\n- item &foo;\n- item &copy 2024\n";
    let expected = "# Speed\n\nA car at 100&nbsp;km/h.\n\n- item &amp;foo;\n- item &copy; 2024\n";
    let result = normalize_entities(input);
    assert_eq!(result, expected, "Failed on multi-line document");
}

#[test]
fn test_idempotence_on_normalized_output() {
    let inputs = [
        "60&nbspkm/h and a&middotb",
        "a &foo; bar",
        "foo &nbsp; bar",
        "plain text & numbers &#160;",
    ];
    for input in inputs {
        let once = normalize_entities(input);
        let twice = normalize_entities(&once);
        assert_eq!(twice, once, "Normalization not idempotent for {input:?}");
    }
}
