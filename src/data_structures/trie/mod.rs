// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary Trie Implementation
//!
//! An in-memory prefix tree storing a set of words, with exact lookup,
//! deletion with pruning, prefix auto-suggestion and edit-distance based
//! spelling suggestions.
//!
//! # Example
//!
//! ```
//! use trie_dictionary_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(trie.insert("caterpillar"));
//! assert!(trie.insert("catastrophe"));
//! assert!(!trie.insert("catastrophe"));
//!
//! assert!(trie.search("caterpillar"));
//! assert_eq!(trie.auto_suggest("cat"), vec!["catastrophe", "caterpillar"]);
//!
//! assert!(trie.delete("caterpillar"));
//! assert_eq!(trie.get_all_words(), vec!["catastrophe"]);
//! ```
//!
//! # Ordering
//!
//! Every operation returning words yields them in depth-first pre-order with
//! children visited in sorted character order, which is plain lexicographic
//! order over `char`s.

mod config;
mod display;
mod node;

use std::fmt;

use tracing::{debug, trace};

use crate::utils::levenshtein::levenshtein_distance_within;

pub use config::{TrieConfig, DEFAULT_MAX_DISTANCE, MAX_SUGGESTION_DISTANCE};
pub use node::{Nodes, TrieNode};

/// A prefix-tree dictionary of words.
///
/// The trie owns a single root sentinel node that is created once and never
/// replaced. Nodes below it are created lazily on insertion and removed as
/// soon as they neither terminate a word nor lead to one.
///
/// Since no dead nodes are kept, the node structure is determined by the
/// stored words; `Clone`, `PartialEq` and `Debug` work on the word set.
pub struct Trie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Creates a trie containing every word yielded by `words`.
    ///
    /// Duplicates are skipped.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Get the configuration of this trie.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the word's path are created. Inserting the empty
    /// string marks the root itself as terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was added, `false` if it was already present (in
    /// which case nothing changes).
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> bool {
        let word = word.as_ref();
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));

        if node.is_terminal {
            trace!(word, "word already present");
            return false;
        }

        node.is_terminal = true;
        debug!(word, "inserted word");
        true
    }

    /// Checks whether `word` is stored as a complete word.
    pub fn search<W: AsRef<str>>(&self, word: W) -> bool {
        self.find_node(word.as_ref())
            .map_or(false, |node| node.is_terminal)
    }

    /// Checks whether any stored word starts with `prefix`.
    ///
    /// The empty prefix always matches.
    pub fn contains_prefix<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Removes a word from the trie.
    ///
    /// Nodes left without children and not terminating another word are
    /// pruned, bottom-up, so no dead leaves remain. The root is never removed.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` if it was
    /// not stored as a complete word (nothing changes in that case).
    pub fn delete<W: AsRef<str>>(&mut self, word: W) -> bool {
        let word = word.as_ref();
        let chars: Vec<char> = word.chars().collect();

        if !self.remove_word(&chars) {
            trace!(word, "word not present, nothing deleted");
            return false;
        }

        debug!(word, "deleted word");
        true
    }

    /// Descent-then-prune used by [`Trie::delete`].
    ///
    /// The first pass finds the deepest node on the path that must survive:
    /// the root, a terminal node, or a node with another branch. Everything
    /// below it on the path leads only to `chars`, so once the word is
    /// unmarked that whole chain is cut off with a single removal.
    fn remove_word(&mut self, chars: &[char]) -> bool {
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, &c) in chars.iter().enumerate() {
            if depth > 0 && (node.is_terminal || node.children.len() > 1) {
                cut = depth;
            }
            match node.child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.is_terminal {
            return false;
        }
        let keep_target = !node.children.is_empty();

        let Some(target) = self.find_node_mut(chars) else {
            return false;
        };
        target.is_terminal = false;

        if keep_target {
            return true;
        }
        // An empty word has no edge to cut: the root itself was the target.
        let Some(&edge) = chars.get(cut) else {
            return true;
        };
        if let Some(survivor) = self.find_node_mut(&chars[..cut]) {
            survivor.children.remove(&edge);
        }
        true
    }

    /// Returns every stored word starting with `prefix`, in lexicographic order.
    ///
    /// The prefix itself is included when it is a stored word. An unknown
    /// prefix yields an empty vector.
    pub fn auto_suggest<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = prefix.as_ref();
        let mut words = Vec::new();

        if let Some(node) = self.find_node(prefix) {
            let mut buffer = String::from(prefix);
            collect_words(node, &mut buffer, &mut words);
        }

        trace!(prefix, count = words.len(), "auto-suggest");
        words
    }

    /// Returns every stored word, in lexicographic order.
    pub fn get_all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut buffer = String::new();
        collect_words(&self.root, &mut buffer, &mut words);
        words
    }

    /// Returns stored words within the configured edit distance of `word`.
    ///
    /// See [`Trie::spelling_suggestions_within`].
    pub fn get_spelling_suggestions<W: AsRef<str>>(&self, word: W) -> Vec<String> {
        self.spelling_suggestions_within(word, self.config.max_distance())
    }

    /// Returns stored words within `max_distance` edits of `word`.
    ///
    /// Only words sharing the first character of `word` are candidates. The
    /// result keeps traversal order and is not ranked by distance. An empty
    /// `word`, or a first character no stored word starts with, yields an
    /// empty vector.
    pub fn spelling_suggestions_within<W: AsRef<str>>(
        &self,
        word: W,
        max_distance: usize,
    ) -> Vec<String> {
        let word = word.as_ref();

        let Some(first) = word.chars().next() else {
            return Vec::new();
        };
        let Some(branch) = self.root.child(first) else {
            trace!(word, "no stored word shares the first character");
            return Vec::new();
        };

        let mut candidates = Vec::new();
        let mut buffer = String::from(first);
        collect_words(branch, &mut buffer, &mut candidates);

        let suggestions: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| levenshtein_distance_within(word, candidate, max_distance).is_some())
            .collect();

        trace!(word, max_distance, count = suggestions.len(), "spelling suggestions");
        suggestions
    }

    /// Returns the number of stored words.
    ///
    /// This walks the whole trie.
    pub fn len(&self) -> usize {
        self.root.word_count()
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Removes every word, keeping the root.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        debug!("cleared trie");
    }

    /// Renders the node structure as an indented tree.
    pub fn render_structure(&self) -> String {
        self.to_string()
    }

    /// Prints the node structure to stdout.
    pub fn print_structure(&self) {
        print!("{self}");
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    fn find_node_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        path.iter()
            .try_fold(&mut self.root, |node, c| node.children.get_mut(c))
    }
}

/// Depth-first pre-order collection of every word at or below `start`.
///
/// `buffer` holds the path spelled up to `start` and is restored before
/// returning. Each stack frame carries the buffer length at its parent.
fn collect_words(start: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
    let base = buffer.len();
    if start.is_terminal {
        words.push(buffer.clone());
    }

    let mut stack: Vec<(&TrieNode, usize)> =
        start.children.values().rev().map(|child| (child, base)).collect();

    while let Some((node, parent_len)) = stack.pop() {
        buffer.truncate(parent_len);
        if let Some(c) = node.character {
            buffer.push(c);
        }
        if node.is_terminal {
            words.push(buffer.clone());
        }

        let len = buffer.len();
        stack.extend(node.children.values().rev().map(|child| (child, len)));
    }

    buffer.truncate(base);
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        let mut root = TrieNode::root();
        for word in self.get_all_words() {
            word.chars()
                .fold(&mut root, |node, c| node.child_or_insert(c))
                .is_terminal = true;
        }
        Self {
            root,
            config: self.config.clone(),
        }
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.get_all_words() == other.get_all_words()
    }
}

impl Eq for Trie {}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.get_all_words())
            .field("config", &self.config)
            .finish()
    }
}

impl<W: AsRef<str>> Extend<W> for Trie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for Trie {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        Self::from_words(words)
    }
}
