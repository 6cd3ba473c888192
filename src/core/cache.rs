use crate::core::types::WordRecord;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Bounded memo table for query results. Eviction is FIFO by insertion
/// order once capacity is reached, not true LRU; a vocabulary mutation
/// clears the whole table instead of invalidating entries piecemeal.
///
/// Values are cloned on the way in and on the way out, so a caller that
/// mutates a returned vector can never corrupt cached state or the live
/// records behind it.
#[derive(Debug, Clone)]
pub struct QueryCache<K> {
    entries: HashMap<K, Vec<WordRecord>>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone> QueryCache<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(64)),
            order: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Defensive copy of the cached result, if any.
    pub fn get(&self, key: &K) -> Option<Vec<WordRecord>> {
        self.entries.get(key).cloned()
    }

    /// Store a result, evicting the oldest entry if the table is full.
    /// Re-storing an existing key refreshes its value in place.
    pub fn insert(&mut self, key: K, value: &[WordRecord]) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.clone(), value.to_vec()).is_some() {
            return;
        }
        self.order.push_back(key);
        if self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Commonality, WordRecord};

    fn value(word: &str) -> Vec<WordRecord> {
        vec![WordRecord::new(word.to_string(), 100, Commonality::Rare)]
    }

    #[test]
    fn miss_then_hit() {
        let mut cache: QueryCache<(String, usize)> = QueryCache::new(10);
        let key = ("th".to_string(), 5);
        assert!(cache.get(&key).is_none());

        cache.insert(key.clone(), &value("the"));
        assert_eq!(cache.get(&key).unwrap()[0].word, "the");
    }

    #[test]
    fn fifo_evicts_oldest_first() {
        let mut cache: QueryCache<usize> = QueryCache::new(2);
        cache.insert(1, &value("one"));
        cache.insert(2, &value("two"));
        cache.insert(3, &value("three"));

        assert!(cache.get(&1).is_none());
        assert!(cache.get(&2).is_some());
        assert!(cache.get(&3).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn refreshing_a_key_does_not_evict() {
        let mut cache: QueryCache<usize> = QueryCache::new(2);
        cache.insert(1, &value("one"));
        cache.insert(2, &value("two"));
        cache.insert(1, &value("uno"));

        assert_eq!(cache.get(&1).unwrap()[0].word, "uno");
        assert!(cache.get(&2).is_some());
    }

    #[test]
    fn mutating_a_returned_value_leaves_the_cache_intact() {
        let mut cache: QueryCache<usize> = QueryCache::new(4);
        cache.insert(1, &value("the"));

        let mut leaked = cache.get(&1).unwrap();
        leaked[0].word = "corrupted".to_string();
        leaked.clear();

        assert_eq!(cache.get(&1).unwrap()[0].word, "the");
    }

    #[test]
    fn empty_results_are_cached() {
        let mut cache: QueryCache<usize> = QueryCache::new(4);
        cache.insert(7, &[]);
        assert_eq!(cache.get(&7), Some(Vec::new()));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache: QueryCache<usize> = QueryCache::new(4);
        cache.insert(1, &value("one"));
        cache.insert(2, &value("two"));
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get(&1).is_none());
    }
}
