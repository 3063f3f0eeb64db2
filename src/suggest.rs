//! Suggestion filtering: case-insensitive substring match over the candidate list.

use crate::candidate::Candidate;

/// Returns true when `value` contains `query`, ignoring case.
///
/// An empty query matches everything.
#[inline]
pub fn is_match(value: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&query.to_lowercase())
}

/// Filter `candidates` down to the ones whose value contains `query`.
///
/// Candidate order is preserved, duplicates are kept and the result is not
/// truncated.
pub fn filter(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| is_match(&c.value, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates;

    fn values(list: &[Candidate]) -> Vec<&str> {
        list.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let c = candidates(["zeta", "alpha", "Mid"]);
        assert_eq!(values(&filter(&c, "")), vec!["zeta", "alpha", "Mid"]);
    }

    #[test]
    fn match_ignores_case() {
        let c = candidates(["Hello"]);
        assert_eq!(values(&filter(&c, "HELLO")), vec!["Hello"]);
        assert!(is_match("Hello", "eLL"));
        assert!(!is_match("Hello", "world"));
    }

    #[test]
    fn shared_prefix_keeps_all_and_order() {
        let c = candidates(["Hel", "Hello", "Hello world"]);
        assert_eq!(values(&filter(&c, "hel")), vec!["Hel", "Hello", "Hello world"]);
        assert_eq!(values(&filter(&c, "hello ")), vec!["Hello world"]);
    }

    #[test]
    fn longer_query_narrows_to_a_subsequence() {
        let c = candidates(["apple", "grape", "pineapple", "maple", "Apricot", "pear"]);
        let queries = ["", "a", "ap", "app", "appl", "apple"];
        for pair in queries.windows(2) {
            let wide = filter(&c, pair[0]);
            let narrow = filter(&c, pair[1]);
            let mut it = wide.iter();
            for item in &narrow {
                assert!(
                    it.any(|w| w == item),
                    "{:?} is not a subsequence of {:?}",
                    values(&narrow),
                    values(&wide)
                );
            }
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let c = candidates(["dup", "Dup", "dup"]);
        assert_eq!(filter(&c, "DUP").len(), 3);
    }

    #[test]
    fn query_is_a_literal_substring() {
        let c = candidates(["a.b", "axb"]);
        assert_eq!(values(&filter(&c, "a.b")), vec!["a.b"]);
    }
}
