//! Host-facing configuration of the control.

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::form::Validation;
use crate::highlight::DEFAULT_TAG;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_ROWS: usize = 8;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub candidates: Vec<Candidate>,
    /// Initial value, written without emitting.
    pub value: Option<String>,
    pub min_length: usize,
    pub disabled: bool,
    pub placeholder: String,
    pub highlight_tag: String,
    pub validation: Validation,
    /// Panel height in rows; 0 means unbounded.
    pub max_rows: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            candidates: Vec::new(),
            value: None,
            min_length: 0,
            disabled: false,
            placeholder: String::new(),
            highlight_tag: DEFAULT_TAG.to_string(),
            validation: Validation::Off,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl Options {
    pub fn from_json(s: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::json(path, e))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&s, path)
    }
}

/// Read a JSON array of candidates (bare strings or `{value, prefix}` objects).
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&s).map_err(|e| Error::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let o = Options::from_json("{}", Path::new("inline")).unwrap();
        assert_eq!(o, Options::default());
        assert_eq!(o.highlight_tag, "b");
        assert_eq!(o.min_length, 0);
    }

    #[test]
    fn camel_case_keys() {
        let json = r#"{
            "candidates": ["a", {"value": "b", "prefix": "*"}],
            "value": "a",
            "minLength": 3,
            "disabled": true,
            "placeholder": "Type...",
            "highlightTag": "strong",
            "validation": "mustMatchCandidate",
            "maxRows": 0
        }"#;
        let o = Options::from_json(json, Path::new("inline")).unwrap();
        assert_eq!(o.candidates.len(), 2);
        assert_eq!(o.value.as_deref(), Some("a"));
        assert_eq!(o.min_length, 3);
        assert!(o.disabled);
        assert_eq!(o.placeholder, "Type...");
        assert_eq!(o.highlight_tag, "strong");
        assert_eq!(o.validation, Validation::MustMatchCandidate);
        assert_eq!(o.max_rows, 0);
    }

    #[test]
    fn bad_json_names_the_file() {
        let err = Options::from_json("{", Path::new("opts.json")).unwrap_err();
        assert!(err.to_string().contains("opts.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_candidates(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
