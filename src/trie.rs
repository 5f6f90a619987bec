//! The finalized, immutable trie store: a flat node list plus a flat
//! child-index array. Produced by [`crate::builder::TrieBuilder::prune`],
//! consumed read-only by the search engine (`search.rs`) and the
//! serializer (`serde_format.rs`).

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::node::Node;

/// Index of the root node.
pub const ROOT: u32 = 0;

/// An immutable, cache-friendly trie: a flat array of packed [`Node`]s
/// and a flat array of child indices. Safe for unsynchronized concurrent
/// readers (spec.md §5): every query allocates only its own scratch
/// stack/buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedTrie {
    pub(crate) alphabet: Alphabet,
    pub(crate) nodes: Vec<Node>,
    pub(crate) child_indices: Vec<u32>,
    pub(crate) word_count: u32,
}

impl FinalizedTrie {
    pub(crate) fn from_parts(
        alphabet: Alphabet,
        nodes: Vec<Node>,
        child_indices: Vec<u32>,
        word_count: u32,
    ) -> Self {
        FinalizedTrie {
            alphabet,
            nodes,
            child_indices,
            word_count,
        }
    }

    /// Number of words stored (nodes with `is_word_end = true`).
    pub fn count(&self) -> u32 {
        self.word_count
    }

    /// Total number of nodes in the store.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub(crate) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn children(&self, index: usize) -> &[u32] {
        &self.child_indices[self.nodes[index].child_range()]
    }

    /// Scans `node`'s children for one whose alphabet codepoint is `c`.
    /// Linear scan is fine: siblings never share a `char_index`
    /// (spec.md §3) and `child_count <= alphabet_size <= 255`.
    pub(crate) fn find_child(&self, node: usize, c: char) -> Option<usize> {
        let char_index = self.alphabet.index_of(c)?;
        for &child in self.children(node) {
            if self.nodes[child as usize].char_index() == char_index {
                return Some(child as usize);
            }
        }
        None
    }

    /// Returns whether `word` is stored in the trie.
    pub fn contains(&self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut current = ROOT as usize;
        for c in word.chars() {
            match self.find_child(current, c) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(self.nodes[current].is_word_end())
    }
}
