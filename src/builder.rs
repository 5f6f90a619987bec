//! The mutable trie builder: owns the alphabet, the growing node store,
//! and each node's per-child growable buffer.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::finalize;
use crate::node::BuilderNode;
use crate::trie::FinalizedTrie;

/// Index of the root node in every node store, builder or finalized.
pub const ROOT: u32 = 0;

/// Mutable, append-only trie under construction.
///
/// Call [`TrieBuilder::add`] or [`TrieBuilder::add_range`] to insert
/// words, then [`TrieBuilder::prune`] to finalize it into a
/// [`FinalizedTrie`]. `prune` consumes the builder, so there is no
/// runtime "locked" flag to check: once finalized, a `TrieBuilder` no
/// longer exists for callers to mutate.
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    alphabet: Alphabet,
    nodes: Vec<BuilderNode>,
    child_buffers: Vec<Vec<u32>>,
    word_count: u32,
}

impl TrieBuilder {
    pub fn new(alphabet: Alphabet) -> Self {
        let root = BuilderNode::new(0);
        TrieBuilder {
            alphabet,
            nodes: vec![root],
            child_buffers: vec![Vec::new()],
            word_count: 0,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Inserts `word`. Fails with [`Error::EmptyInput`] if `word` is
    /// empty, or [`Error::UnknownCharacter`] on the first codepoint not
    /// in the alphabet (no partial insertion happens in that case: the
    /// walk stops before creating any node for an unknown character, but
    /// any prefix nodes shared with previously inserted words remain, as
    /// they would for a successful insert sharing that prefix).
    pub fn add(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut current = ROOT as usize;
        for c in word.chars() {
            let char_index = self
                .alphabet
                .index_of(c)
                .ok_or(Error::UnknownCharacter(c))?;
            current = self.child_or_insert(current, char_index);
        }
        let was_word_end = self.nodes[current].set_is_word_end(true);
        if !was_word_end {
            self.word_count += 1;
        }
        log::trace!("added word {:?} ({} nodes so far)", word, self.nodes.len());
        Ok(())
    }

    /// Inserts each word in `words` in order, stopping at (and
    /// propagating) the first failure.
    pub fn add_range<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref())?;
        }
        Ok(())
    }

    /// Finds the child of `node` with the given `char_index`, linearly
    /// scanning its child buffer, creating a new node if none matches.
    /// Linear scan is acceptable because `child_count <= alphabet_size
    /// <= 255` (spec.md §4.2).
    fn child_or_insert(&mut self, node: usize, char_index: u8) -> usize {
        for &child in &self.child_buffers[node] {
            if self.nodes[child as usize].char_index == char_index {
                return child as usize;
            }
        }
        let new_index = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::new(char_index));
        self.child_buffers.push(Vec::new());
        self.child_buffers[node].push(new_index);
        new_index as usize
    }

    /// Finalizes the builder: flattens child buffers into a single flat
    /// array (optionally sorted by alphabet index), optionally merges
    /// identical subtrees (DAWG minimization), compacts to reachable
    /// nodes only, and computes `remaining_depth` for every node. See
    /// spec.md §4.3 for the full pipeline.
    pub fn prune(self, sort: bool, compact: bool) -> FinalizedTrie {
        log::debug!(
            "finalizing trie: {} words, {} builder nodes, sort={sort}, compact={compact}",
            self.word_count,
            self.nodes.len()
        );
        finalize::prune(self, sort, compact)
    }

    pub(crate) fn into_parts(self) -> (Alphabet, Vec<BuilderNode>, Vec<Vec<u32>>, u32) {
        (self.alphabet, self.nodes, self.child_buffers, self.word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new(vec!['\0', 'a', 'b', 'c']).unwrap()
    }

    #[test]
    fn rejects_empty_word() {
        let mut builder = TrieBuilder::new(alphabet());
        assert_eq!(builder.add("").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn rejects_unknown_character() {
        let mut builder = TrieBuilder::new(alphabet());
        assert_eq!(
            builder.add("az").unwrap_err(),
            Error::UnknownCharacter('z')
        );
    }

    #[test]
    fn shares_common_prefixes() {
        let mut builder = TrieBuilder::new(alphabet());
        builder.add("ab").unwrap();
        builder.add("ac").unwrap();
        // root -> 'a' -> {'b','c'}: 3 nodes total.
        assert_eq!(builder.num_nodes(), 3);
        assert_eq!(builder.word_count(), 2);
    }

    #[test]
    fn repeated_word_counts_once() {
        let mut builder = TrieBuilder::new(alphabet());
        builder.add("ab").unwrap();
        builder.add("ab").unwrap();
        assert_eq!(builder.word_count(), 1);
    }
}
