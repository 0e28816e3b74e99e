//! Test modules for the trie dictionary.
//!
//! This module contains the crate-internal test suites:
//! - Property-based tests for the trie and edit distance using proptest
//! - Configuration loading tests against temporary files
//! - Error conversion and display tests
//! - Shared strategies and fixtures

pub mod trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dictionary_strategy, string_strategy, word_strategy, TestFixture};
