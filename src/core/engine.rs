use crate::core::cache::QueryCache;
use crate::core::trie::{InsertOutcome, PrefixTrie};
use crate::core::types::{Commonality, DictionaryStats, MatchKind, Suggestion, WordRecord};
use crate::fuzzy::distance::spelling_suggestions;
use crate::ingest::{self, BatchReport, RawEntry};

/// Queries shorter than this are a normal state while the user is still
/// typing and return no results rather than an error.
const MIN_QUERY_LEN: usize = 2;

/// Corrections further than this many edits away are never offered.
const MAX_EDIT_DISTANCE: usize = 2;

const PREFIX_CACHE_CAPACITY: usize = 1000;
const SPELL_CACHE_CAPACITY: usize = 500;

type PrefixKey = (String, usize);
type SpellKey = (String, usize, usize);

/// The autocomplete and spell-correction engine: a prefix trie over a live
/// vocabulary, an edit-distance fallback, and one memo table per matcher.
///
/// Construct one explicitly with [`SuggestEngine::new`] and keep it for the
/// process lifetime; dropping it is shutdown. All operations are synchronous
/// and run to completion. `lookup` takes `&mut self` because it warms the
/// caches; a concurrent host treats the whole engine as a single mutable
/// resource behind one lock.
pub struct SuggestEngine {
    trie: PrefixTrie,
    prefix_cache: QueryCache<PrefixKey>,
    spell_cache: QueryCache<SpellKey>,
}

impl SuggestEngine {
    pub fn new() -> Self {
        Self {
            trie: PrefixTrie::new(),
            prefix_cache: QueryCache::new(PREFIX_CACHE_CAPACITY),
            spell_cache: QueryCache::new(SPELL_CACHE_CAPACITY),
        }
    }

    /// Ranked suggestions for a partial or misspelled word.
    ///
    /// The query goes to the prefix index first; when that yields nothing,
    /// the edit-distance matcher is consulted against the full vocabulary.
    /// Each row carries [`MatchKind`] to say which path produced it. A query
    /// below the two-character minimum, or one that matches nothing, returns
    /// an empty vector, never an error.
    pub fn lookup(&mut self, query: &str, limit: usize) -> Vec<Suggestion> {
        let query = ingest::normalize(query);
        if query.chars().count() < MIN_QUERY_LEN || limit == 0 {
            return Vec::new();
        }

        let completions = self.prefix_search(&query, limit);
        if !completions.is_empty() {
            return completions
                .iter()
                .map(|record| Suggestion::from_record(record, MatchKind::Autocomplete))
                .collect();
        }

        self.corrections(&query, limit)
            .iter()
            .map(|record| Suggestion::from_record(record, MatchKind::Spellcheck))
            .collect()
    }

    fn prefix_search(&mut self, query: &str, limit: usize) -> Vec<WordRecord> {
        let key = (query.to_string(), limit);
        if let Some(hit) = self.prefix_cache.get(&key) {
            return hit;
        }
        let results = self.trie.search(query, limit);
        self.prefix_cache.insert(key, &results);
        results
    }

    fn corrections(&mut self, query: &str, limit: usize) -> Vec<WordRecord> {
        let key = (query.to_string(), MAX_EDIT_DISTANCE, limit);
        if let Some(hit) = self.spell_cache.get(&key) {
            return hit;
        }
        let results = spelling_suggestions(self.trie.records(), query, MAX_EDIT_DISTANCE, limit);
        self.spell_cache.insert(key, &results);
        results
    }

    /// The sole ingestion entry point. Each entry is validated, admitted
    /// records are inserted or merged, and both caches are cleared if
    /// anything actually changed. A duplicate word counts as admitted even
    /// when the merge rule leaves it untouched.
    pub fn admit_batch(&mut self, entries: &[RawEntry]) -> BatchReport {
        let mut report = BatchReport::default();
        let mut mutated = false;
        for entry in entries {
            match ingest::validate(entry) {
                Some(record) => {
                    match self.trie.insert(record) {
                        InsertOutcome::Added | InsertOutcome::Updated => mutated = true,
                        InsertOutcome::Unchanged => {}
                    }
                    report.admitted += 1;
                }
                None => report.rejected += 1,
            }
        }
        if mutated {
            self.prefix_cache.clear();
            self.spell_cache.clear();
        }
        report
    }

    /// Aggregate snapshot over the current vocabulary.
    pub fn stats(&self) -> DictionaryStats {
        let records = self.trie.records();
        if records.is_empty() {
            return DictionaryStats::empty();
        }

        let total = records.len();
        let mut common = 0;
        let mut uncommon = 0;
        let mut rare = 0;
        let mut frequency_sum: u64 = 0;
        let mut length_sum: usize = 0;
        for record in records {
            match record.commonality {
                Commonality::Common => common += 1,
                Commonality::Uncommon => uncommon += 1,
                Commonality::Rare => rare += 1,
            }
            frequency_sum += record.frequency;
            length_sum += record.length;
        }

        DictionaryStats {
            total_words: total,
            common_words: common,
            uncommon_words: uncommon,
            rare_words: rare,
            avg_frequency: (frequency_sum as f64 / total as f64).round() as u64,
            avg_length: (length_sum as f64 / total as f64 * 10.0).round() / 10.0,
        }
    }

    /// Exact-match membership test, case-insensitive.
    pub fn has_word(&self, word: &str) -> bool {
        self.trie.has_word(word.trim())
    }

    /// Exact-match record lookup, case-insensitive.
    pub fn get_word(&self, word: &str) -> Option<&WordRecord> {
        self.trie.get_word(word.trim())
    }

    /// All records carrying the given commonality bucket.
    pub fn words_by_commonality(&self, commonality: Commonality) -> Vec<WordRecord> {
        self.trie
            .records()
            .iter()
            .filter(|record| record.commonality == commonality)
            .cloned()
            .collect()
    }

    pub fn word_count(&self) -> usize {
        self.trie.len()
    }
}

impl Default for SuggestEngine {
    fn default() -> Self {
        Self::new()
    }
}
