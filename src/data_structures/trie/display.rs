//! Text rendering of the trie structure.
//!
//! Debug aid only. The output starts with a `root` line followed by one line
//! per node, drawn with box-drawing branches:
//!
//! ```text
//! root
//! └─c
//!   └─a
//!     ├─r
//!     └─t
//! ```

use std::fmt;

use super::node::TrieNode;
use super::Trie;

/// A node waiting to be drawn: its character, the node, the indent length
/// at its parent, and whether it is the parent's last child.
type Pending<'a> = (char, &'a TrieNode, usize, bool);

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root")?;

        let mut indent = String::new();
        let mut stack = Vec::new();
        push_children(&mut stack, &self.root, 0);

        while let Some((c, node, parent_indent, is_last)) = stack.pop() {
            indent.truncate(parent_indent);
            let (branch, continuation) = if is_last { ("└─", "  ") } else { ("├─", "│ ") };

            writeln!(f, "{indent}{branch}{c}")?;

            indent.push_str(continuation);
            push_children(&mut stack, node, indent.len());
        }

        Ok(())
    }
}

/// Pushes the children of `node` so that the first in sorted order pops first.
fn push_children<'a>(stack: &mut Vec<Pending<'a>>, node: &'a TrieNode, indent: usize) {
    let last_index = node.children.len().saturating_sub(1);
    stack.extend(
        node.children
            .iter()
            .enumerate()
            .rev()
            .map(|(index, (&c, child))| (c, child, indent, index == last_index)),
    );
}
