//! Prefix-autocomplete and spell-correction engine over a live, mutable
//! vocabulary.
//!
//! A query enters through [`SuggestEngine::lookup`]: the prefix trie is
//! tried first, and when it has nothing the edit-distance matcher supplies
//! corrections from the full vocabulary. Words enter through
//! [`SuggestEngine::admit_batch`], the only mutation path, which validates
//! each candidate and invalidates both query caches on any change.
//!
//! The crate is a single-process, synchronous library; networking, file
//! handling, and UI belong to the caller. The [`ingest::format`] adapters
//! turn CSV/JSON upload payloads into the rows `admit_batch` accepts.

pub mod core;
pub mod fuzzy;
pub mod ingest;

pub use crate::core::engine::SuggestEngine;
pub use crate::core::types::{Commonality, DictionaryStats, MatchKind, Suggestion, WordRecord};
pub use crate::ingest::{BatchReport, RawEntry};
