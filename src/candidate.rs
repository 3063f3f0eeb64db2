use serde::Deserialize;
use std::fmt;

/// One entry of the candidate list.
///
/// Only `value` takes part in matching, highlighting, selection and
/// validation. `prefix` is decoration printed in front of the row (an emoji
/// flag, an icon, a short tag).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCandidate")]
pub struct Candidate {
    pub value: String,
    pub prefix: Option<String>,
}

// JSON accepts either `"Hello"` or `{"value": "Hello", "prefix": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCandidate {
    Plain(String),
    Decorated {
        value: String,
        #[serde(default)]
        prefix: Option<String>,
    },
}

impl From<RawCandidate> for Candidate {
    fn from(raw: RawCandidate) -> Self {
        match raw {
            RawCandidate::Plain(value) => Candidate::new(value),
            RawCandidate::Decorated { value, prefix } => Candidate {
                value,
                prefix: prefix.filter(|p| !p.is_empty()),
            },
        }
    }
}

impl Candidate {
    pub fn new(value: impl Into<String>) -> Self {
        Candidate {
            value: value.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(value: impl Into<String>, prefix: impl Into<String>) -> Self {
        Candidate {
            value: value.into(),
            prefix: Some(prefix.into()),
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::new(value)
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::new(value)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Build a candidate list from anything string-like, preserving order.
pub fn candidates<I, S>(items: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: Into<Candidate>,
{
    items.into_iter().map(Into::into).collect()
}

/// The list the demo host starts with when nothing else is configured.
pub fn demo_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("Hel"),
        Candidate::new("Hello"),
        Candidate::with_prefix("Hello wor", "🇺🇸"),
        Candidate::new("Hello world!"),
    ]
}

pub fn contains_value(list: &[Candidate], value: &str) -> bool {
    list.iter().any(|c| c.value == value)
}
