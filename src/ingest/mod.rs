//! Ingestion validation: the only gate through which words enter the
//! prefix index. Upload adapters ([`format`]) turn CSV/JSON payloads into
//! [`RawEntry`] rows; the validator normalizes each row, applies the word
//! shape rule, and resolves commonality before handing a record to the trie.

pub mod format;

use crate::core::types::{Commonality, WordRecord};
use serde::{Deserialize, Serialize};

const MIN_WORD_LEN: usize = 2;
const MAX_WORD_LEN: usize = 50;

/// One externally supplied vocabulary row, as emitted by the upload
/// adapters: a word plus optional frequency and commonality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub word: String,
    #[serde(default)]
    pub frequency: Option<u64>,
    #[serde(default)]
    pub commonality: Option<Commonality>,
}

impl RawEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            frequency: None,
            commonality: None,
        }
    }

    pub fn with_frequency(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency: Some(frequency),
            commonality: None,
        }
    }
}

/// Per-batch outcome counts, so an upload pipeline can report
/// "N added, M skipped". A duplicate word that merges (or merges to
/// nothing) still counts as admitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub admitted: usize,
    pub rejected: usize,
}

/// Lowercase and trim a candidate word. Identity is case-insensitive, so
/// this runs before any existence check.
pub fn normalize(word: &str) -> String {
    word.trim().to_ascii_lowercase()
}

/// The word shape rule: 2 to 50 characters, starts and ends with a letter,
/// interior characters limited to letters, hyphens, and apostrophes.
/// Single-letter words are rejected by the length floor.
pub fn is_valid_shape(word: &str) -> bool {
    let len = word.chars().count();
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        return false;
    }
    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    let mut last = first;
    for c in chars {
        if !(c.is_ascii_lowercase() || c == '-' || c == '\'') {
            return false;
        }
        last = c;
    }
    last.is_ascii_lowercase()
}

/// Validate a raw entry and build the record the trie should hold.
/// Returns `None` for a shape violation. An explicitly supplied
/// commonality always wins over the frequency-derived one.
pub fn validate(entry: &RawEntry) -> Option<WordRecord> {
    let word = normalize(&entry.word);
    if !is_valid_shape(&word) {
        return None;
    }
    let frequency = entry.frequency.unwrap_or(0);
    let commonality = entry
        .commonality
        .unwrap_or_else(|| Commonality::from_frequency(frequency));
    Some(WordRecord::new(word, frequency, commonality))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_rule_boundaries() {
        assert!(!is_valid_shape("a"));
        assert!(is_valid_shape("ab"));
        assert!(is_valid_shape(&"a".repeat(50)));
        assert!(!is_valid_shape(&"a".repeat(51)));
    }

    #[test]
    fn hyphens_and_apostrophes_are_interior_only() {
        assert!(is_valid_shape("co-op"));
        assert!(is_valid_shape("don't"));
        assert!(!is_valid_shape("-cat"));
        assert!(!is_valid_shape("cat-"));
        assert!(!is_valid_shape("'em"));
        assert!(!is_valid_shape("cats'"));
    }

    #[test]
    fn digits_and_symbols_are_rejected() {
        assert!(!is_valid_shape("cat123"));
        assert!(!is_valid_shape("ca t"));
        assert!(!is_valid_shape("café"));
        assert!(!is_valid_shape(""));
    }

    #[test]
    fn validate_normalizes_before_checking() {
        let record = validate(&RawEntry::with_frequency("  Theory ", 500)).unwrap();
        assert_eq!(record.word, "theory");
        assert_eq!(record.frequency, 500);
    }

    #[test]
    fn explicit_commonality_wins_over_derivation() {
        let entry = RawEntry {
            word: "theory".to_string(),
            frequency: Some(50_000),
            commonality: Some(Commonality::Rare),
        };
        assert_eq!(validate(&entry).unwrap().commonality, Commonality::Rare);
    }

    #[test]
    fn missing_commonality_is_derived_from_frequency() {
        let record = validate(&RawEntry::with_frequency("theory", 50_000)).unwrap();
        assert_eq!(record.commonality, Commonality::Common);
    }

    #[test]
    fn missing_frequency_defaults_to_zero_and_rare() {
        let record = validate(&RawEntry::new("theory")).unwrap();
        assert_eq!(record.frequency, 0);
        assert_eq!(record.commonality, Commonality::Rare);
    }

    #[test]
    fn uppercase_input_passes_after_normalization() {
        assert!(validate(&RawEntry::new("THEORY")).is_some());
    }
}
