//! Textual rewriter for array literals embedded in a JS data file.
//!
//! This is pattern substitution, not a parser. Bracketed spans are matched
//! non-greedily, so only the innermost complete `[` ... `]` pair on a nested
//! structure is seen, and a handful of textual heuristics decide whether a
//! span is safe to rewrite. Spans that look like objects, expressions, or
//! commented regions are left byte-for-byte unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[(.*?)\]").expect("bracket pattern"));

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("string pattern"));

/// Sort every recognizable string-array literal in `content`.
///
/// Returns `Cow::Borrowed` when nothing matched; note that an equal
/// `Cow::Owned` can still come back when matches existed but none needed a
/// rewrite, so callers compare against the original before writing.
pub fn sort_array_literals(content: &str) -> Cow<'_, str> {
    BRACKETED.replace_all(content, |caps: &Captures| rewrite_literal(caps))
}

fn rewrite_literal(caps: &Captures) -> String {
    let full = caps[0].to_string();
    let inner = &caps[1];

    // Objects and calls hide behind brackets too; don't touch those.
    if inner.contains('{') || inner.contains('}') || inner.contains('(') {
        return full;
    }

    // Rewriting would drop comments, so commented spans are off limits.
    if inner.contains("//") || inner.contains("/*") {
        return full;
    }

    let items: Vec<&str> = QUOTED
        .captures_iter(inner)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    // A lone string (or none) could be an index access; leave it alone.
    if items.len() < 2 {
        return full;
    }

    let mut sorted = items.clone();
    sorted.sort_unstable();
    if sorted == items {
        // Already in order; keep the original formatting to avoid noisy diffs.
        return full;
    }

    format!("[\"{}\"]", sorted.join("\", \""))
}
