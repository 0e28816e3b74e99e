//! Node implementation for the dictionary trie.
//!
//! Each node is exclusively owned by its parent's `children` map, so the tree
//! has no shared or back references. Children are kept in a `BTreeMap` so that
//! every traversal visits them in sorted character order.
//!
//! A trie is as deep as its longest word, so nothing here recurses per level:
//! traversals keep an explicit stack and `Drop` tears subtrees down in a loop.

use std::collections::BTreeMap;

/// A node in the dictionary trie.
///
/// Each node represents one character position reachable from the root along
/// the path of some stored word. Terminal nodes mark the end of a stored word.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// The character this node represents (`None` for the root sentinel).
    /// Always equal to the key under which the parent stores this node.
    pub character: Option<char>,

    /// Map of characters to child nodes, iterated in sorted order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node spells a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new non-terminal node for `character`.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Creates the root sentinel node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the child for `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child for `c`, creating it when missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// A node can be dropped from its parent once it is neither terminal nor has children.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of terminal nodes in this subtree, including this node.
    pub fn word_count(&self) -> usize {
        self.iter().filter(|node| node.is_terminal).count()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.iter().count() - 1
    }

    /// Iterates over this node and all of its descendants in depth-first
    /// pre-order, children in sorted character order.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Pre-order iterator over a subtree, see [`TrieNode::iter`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.values().rev());
        Some(node)
    }
}
