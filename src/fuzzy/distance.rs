use crate::core::types::WordRecord;
use std::cmp::Reverse;

/// Value returned when the length gap alone proves the distance exceeds 2.
/// Callers only ever test `distance <= 2`, so this is a sound shortcut; it
/// is not the exact distance in that regime.
pub const PRUNED_DISTANCE: usize = 3;

/// Unit-cost Levenshtein distance between two strings.
///
/// Fast paths: identical strings are 0, an empty string is the other's
/// length, and a length gap above 2 returns [`PRUNED_DISTANCE`] without
/// building the DP table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    if a.len().abs_diff(b.len()) > 2 {
        return PRUNED_DISTANCE;
    }

    // Two-row DP over the (|a|+1) x (|b|+1) table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1];
            } else {
                curr[j] = 1 + prev[j].min(curr[j - 1]).min(prev[j - 1]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Ranked spelling corrections for `query` drawn from the full vocabulary.
///
/// Records are pre-filtered by word length (a length gap above
/// `max_distance` cannot be within range), survivors get an exact distance,
/// and only `0 < distance <= max_distance` is kept — distance 0 is an exact
/// match, and this path produces corrections, not confirmations. Results
/// are ordered by ascending distance, then descending frequency.
pub fn spelling_suggestions(
    records: &[WordRecord],
    query: &str,
    max_distance: usize,
    limit: usize,
) -> Vec<WordRecord> {
    let query = query.to_ascii_lowercase();
    let query_len = query.chars().count();

    let mut scored: Vec<(usize, &WordRecord)> = records
        .iter()
        .filter(|record| record.length.abs_diff(query_len) <= max_distance)
        .filter_map(|record| {
            let distance = edit_distance(&query, &record.word);
            (distance > 0 && distance <= max_distance).then_some((distance, record))
        })
        .collect();

    scored.sort_by_key(|&(distance, record)| (distance, Reverse(record.frequency)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, record)| record.clone())
        .collect()
}
