use crate::core::types::{WordId, WordRecord};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Internal safety cap on how many terminal records a single prefix walk may
/// collect. Applied before the final sort and truncation, independent of the
/// caller's limit, so DFS cost stays constant on prefixes with huge fan-out.
const SCAN_CAP: usize = 50;

/// What an insert did to the vocabulary. The engine clears its caches on
/// `Added` and `Updated`; `Unchanged` mutated nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<u8, usize>,
    word_id: Option<WordId>,
    /// Highest frequency of any terminal in this subtree. Drives the
    /// child-visit order so high-frequency words are discovered first.
    max_freq_in_subtree: u64,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            word_id: None,
            max_freq_in_subtree: 0,
        }
    }
}

/// Arena-backed prefix index. Nodes live in a flat `Vec` and refer to each
/// other by index; terminal nodes and the auxiliary word map both point into
/// the record arena by [`WordId`], so exactly one record exists per
/// normalized word.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    records: Vec<WordRecord>,
    word_map: HashMap<String, WordId>,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            records: Vec::new(),
            word_map: HashMap::new(),
        }
    }

    /// Insert a record, or merge it into an existing one with the same
    /// normalized word. A duplicate only updates frequency and commonality
    /// when the candidate frequency is strictly greater than the stored one.
    ///
    /// Shape validation is the ingestion validator's job; any record with a
    /// non-empty word is accepted here.
    pub fn insert(&mut self, candidate: WordRecord) -> InsertOutcome {
        if candidate.word.is_empty() {
            return InsertOutcome::Unchanged;
        }

        if let Some(&id) = self.word_map.get(&candidate.word) {
            if candidate.frequency > self.records[id].frequency {
                self.records[id].frequency = candidate.frequency;
                self.records[id].commonality = candidate.commonality;
                let word = self.records[id].word.clone();
                self.raise_path_max(&word, candidate.frequency);
                return InsertOutcome::Updated;
            }
            return InsertOutcome::Unchanged;
        }

        let id = self.records.len();
        let frequency = candidate.frequency;
        let word = candidate.word.clone();
        self.records.push(candidate);
        self.word_map.insert(word.clone(), id);

        let mut node_idx = 0;
        let mut path = vec![0];
        for &byte in word.as_bytes() {
            let next_idx = if let Some(&child) = self.nodes[node_idx].children.get(&byte) {
                child
            } else {
                let new_idx = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_idx);
                new_idx
            };
            node_idx = next_idx;
            path.push(node_idx);
        }
        self.nodes[node_idx].word_id = Some(id);

        for &idx in &path {
            if frequency > self.nodes[idx].max_freq_in_subtree {
                self.nodes[idx].max_freq_in_subtree = frequency;
            }
        }
        InsertOutcome::Added
    }

    // Frequencies only ever grow, so taking the max along the word's path
    // keeps every subtree summary exact.
    fn raise_path_max(&mut self, word: &str, frequency: u64) {
        let mut node_idx = 0;
        if frequency > self.nodes[0].max_freq_in_subtree {
            self.nodes[0].max_freq_in_subtree = frequency;
        }
        for &byte in word.as_bytes() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&child) => node_idx = child,
                None => return,
            }
            if frequency > self.nodes[node_idx].max_freq_in_subtree {
                self.nodes[node_idx].max_freq_in_subtree = frequency;
            }
        }
    }

    /// Up to `limit` records whose word starts with `prefix`, ordered by
    /// descending frequency with ties kept in discovery order. A prefix with
    /// no node short-circuits to an empty vector.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<WordRecord> {
        let prefix = prefix.to_ascii_lowercase();
        let mut node_idx = 0;
        for &byte in prefix.as_bytes() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&child) => node_idx = child,
                None => return Vec::new(),
            }
        }

        let mut found: Vec<WordId> = Vec::new();
        self.collect(node_idx, &mut found);

        let mut results: Vec<WordRecord> =
            found.into_iter().map(|id| self.records[id].clone()).collect();
        results.sort_by_key(|record| Reverse(record.frequency));
        results.truncate(limit);
        results
    }

    fn collect(&self, node_idx: usize, found: &mut Vec<WordId>) {
        if found.len() >= SCAN_CAP {
            return;
        }
        let node = &self.nodes[node_idx];
        if let Some(id) = node.word_id {
            found.push(id);
        }

        // Visit children by descending subtree frequency so likely winners
        // surface before the cap bites; byte order breaks ties so the walk
        // is deterministic.
        let mut children: Vec<(u8, usize)> =
            node.children.iter().map(|(&byte, &idx)| (byte, idx)).collect();
        children.sort_by_key(|&(byte, idx)| (Reverse(self.nodes[idx].max_freq_in_subtree), byte));

        for (_, child_idx) in children {
            if found.len() >= SCAN_CAP {
                break;
            }
            self.collect(child_idx, found);
        }
    }

    /// O(1) exact-match membership test, case-insensitive.
    pub fn has_word(&self, word: &str) -> bool {
        self.word_map.contains_key(&word.to_ascii_lowercase())
    }

    /// O(1) exact-match lookup, case-insensitive.
    pub fn get_word(&self, word: &str) -> Option<&WordRecord> {
        self.word_map
            .get(&word.to_ascii_lowercase())
            .map(|&id| &self.records[id])
    }

    /// The full vocabulary, in insertion order. The spelling matcher and the
    /// stats snapshot scan this.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Commonality;

    fn record(word: &str, frequency: u64) -> WordRecord {
        WordRecord::new(
            word.to_string(),
            frequency,
            Commonality::from_frequency(frequency),
        )
    }

    fn words(results: &[WordRecord]) -> Vec<&str> {
        results.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn search_ranks_by_descending_frequency() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("the", 100_000));
        trie.insert(record("that", 95_000));
        trie.insert(record("think", 25_000));

        assert_eq!(words(&trie.search("th", 10)), vec!["the", "that", "think"]);
    }

    #[test]
    fn missing_prefix_returns_empty() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("the", 100));
        assert!(trie.search("zz", 10).is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("theory", 500));
        assert_eq!(words(&trie.search("THE", 5)), vec!["theory"]);
    }

    #[test]
    fn limit_truncates_after_full_sort() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("cab", 10));
        trie.insert(record("car", 30));
        trie.insert(record("cat", 20));

        assert_eq!(words(&trie.search("ca", 2)), vec!["car", "cat"]);
    }

    #[test]
    fn ties_keep_discovery_order_across_calls() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("abcd", 100));
        trie.insert(record("abce", 100));
        trie.insert(record("abcf", 100));

        let first_results = trie.search("abc", 10);
        let first = words(&first_results);
        for _ in 0..5 {
            assert_eq!(words(&trie.search("abc", 10)), first);
        }
    }

    #[test]
    fn merge_keeps_single_record_and_highest_frequency() {
        let mut trie = PrefixTrie::new();
        assert_eq!(trie.insert(record("cat", 500)), InsertOutcome::Added);
        assert_eq!(trie.insert(record("cat", 900)), InsertOutcome::Updated);
        assert_eq!(trie.insert(record("cat", 100)), InsertOutcome::Unchanged);

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get_word("cat").unwrap().frequency, 900);
        assert_eq!(trie.search("ca", 10).len(), 1);
    }

    #[test]
    fn merge_updates_commonality_with_frequency() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("cat", 500));
        trie.insert(record("cat", 20_000));
        assert_eq!(trie.get_word("cat").unwrap().commonality, Commonality::Common);
    }

    #[test]
    fn exact_lookups_are_case_insensitive() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("theory", 42));
        assert!(trie.has_word("Theory"));
        assert_eq!(trie.get_word("THEORY").unwrap().frequency, 42);
        assert!(!trie.has_word("theor"));
    }

    #[test]
    fn collection_stops_at_internal_cap() {
        let mut trie = PrefixTrie::new();
        for i in 0..60 {
            trie.insert(record(&format!("word{i:02}"), i as u64));
        }
        assert_eq!(trie.search("word", 100).len(), SCAN_CAP);
    }

    #[test]
    fn high_frequency_word_survives_the_cap() {
        let mut trie = PrefixTrie::new();
        for i in 0..80 {
            trie.insert(record(&format!("prefix{i:02}"), 10));
        }
        trie.insert(record("prefixzz", 9_999));

        let top = trie.search("prefix", 1);
        assert_eq!(words(&top), vec!["prefixzz"]);
    }

    #[test]
    fn updated_frequency_reorders_results() {
        let mut trie = PrefixTrie::new();
        trie.insert(record("cab", 10));
        trie.insert(record("cat", 5));
        assert_eq!(words(&trie.search("ca", 10)), vec!["cab", "cat"]);

        trie.insert(record("cat", 50));
        assert_eq!(words(&trie.search("ca", 10)), vec!["cat", "cab"]);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut trie = PrefixTrie::new();
        assert_eq!(trie.insert(record("", 10)), InsertOutcome::Unchanged);
        assert!(trie.is_empty());
    }
}
