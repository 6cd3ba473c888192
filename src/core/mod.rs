pub mod cache;
pub mod engine;
pub mod trie;
pub mod types;
