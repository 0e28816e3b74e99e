//! Data structures for the trie dictionary.
//!
//! All implementations are single-threaded and contain no unsafe code.
//! Callers needing shared access should wrap a whole structure in one lock.

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieConfig, TrieNode};
