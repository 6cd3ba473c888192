use serde::{Deserialize, Serialize};

/// Arena index of a vocabulary entry. The trie's terminal nodes and the
/// word map both refer to records through this id; the record arena in
/// [`crate::core::trie::PrefixTrie`] is the single owner.
pub type WordId = usize;

/// Coarse three-level popularity bucket attached to each vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commonality {
    Common,
    Uncommon,
    Rare,
}

impl Commonality {
    /// Derive a bucket from a raw frequency: above 10 000 is common,
    /// below 1 000 is rare, everything in between is uncommon.
    pub fn from_frequency(frequency: u64) -> Self {
        if frequency > 10_000 {
            Commonality::Common
        } else if frequency < 1_000 {
            Commonality::Rare
        } else {
            Commonality::Uncommon
        }
    }

    /// Parse an explicitly supplied bucket name, case-insensitively.
    /// Unknown names yield `None` and the caller falls back to derivation.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "common" => Some(Commonality::Common),
            "uncommon" => Some(Commonality::Uncommon),
            "rare" => Some(Commonality::Rare),
            _ => None,
        }
    }
}

/// One vocabulary entry. `word` is already normalized (lowercase, trimmed)
/// by the time a record exists; `length` is denormalized for the cheap
/// length pre-filter in the spelling matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub frequency: u64,
    pub length: usize,
    pub commonality: Commonality,
}

impl WordRecord {
    pub fn new(word: String, frequency: u64, commonality: Commonality) -> Self {
        let length = word.chars().count();
        Self {
            word,
            frequency,
            length,
            commonality,
        }
    }
}

/// Which matcher produced a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The prefix index had words starting with the query.
    Autocomplete,
    /// The prefix index was empty for the query and the edit-distance
    /// matcher supplied corrections instead.
    Spellcheck,
}

/// A ranked row returned by [`crate::SuggestEngine::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub frequency: u64,
    pub commonality: Commonality,
    pub match_kind: MatchKind,
}

impl Suggestion {
    pub fn from_record(record: &WordRecord, match_kind: MatchKind) -> Self {
        Self {
            word: record.word.clone(),
            frequency: record.frequency,
            commonality: record.commonality,
            match_kind,
        }
    }
}

/// Read-only aggregate snapshot of the live vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub common_words: usize,
    pub uncommon_words: usize,
    pub rare_words: usize,
    /// Mean frequency, rounded to the nearest integer.
    pub avg_frequency: u64,
    /// Mean word length, rounded to one decimal place.
    pub avg_length: f64,
}

impl DictionaryStats {
    pub fn empty() -> Self {
        Self {
            total_words: 0,
            common_words: 0,
            uncommon_words: 0,
            rare_words: 0,
            avg_frequency: 0,
            avg_length: 0.0,
        }
    }
}
