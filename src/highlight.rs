//! Marking the matched part of a suggestion.

use regex::{Regex, RegexBuilder};
use std::ops::Range;

pub const DEFAULT_TAG: &str = "b";

// The query is user text: escape it so `.`, `*`, `(` and friends match literally.
fn query_pattern(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Byte range of the first case-insensitive occurrence of `query` in `item`.
pub fn match_range(item: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    query_pattern(query)?.find(item).map(|m| m.range())
}

/// Wrap the first match of `query` in `item` with `<tag>...</tag>`.
///
/// With an empty query, or no match, the item comes back unchanged.
pub fn highlight(item: &str, query: &str, tag: &str) -> String {
    match match_range(item, query) {
        Some(r) => format!(
            "{}<{tag}>{}</{tag}>{}",
            &item[..r.start],
            &item[r.clone()],
            &item[r.end..]
        ),
        None => item.to_string(),
    }
}
