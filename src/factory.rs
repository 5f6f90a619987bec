//! Builds a [`FinalizedTrie`] from a line-delimited dictionary file, and
//! exports/imports the JSON wire format to/from disk. See spec.md §4.8/§6.

use std::fs;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::builder::TrieBuilder;
use crate::error::{Error, Result};
use crate::serde_format::SerializedTrie;
use crate::trie::FinalizedTrie;

/// The reserved root codepoint every alphabet built by this factory uses
/// (spec.md §9, Open Question (c)): a control character no legitimate
/// dictionary word can contain.
const RESERVED_ROOT_CODEPOINT: char = '\0';

/// Scans a dictionary to build an [`Alphabet`], then hands out fresh
/// [`TrieBuilder`]s against it.
pub struct CharTrieFactory {
    alphabet: Alphabet,
}

impl CharTrieFactory {
    /// Scans `path` (one word per line, trailing blank lines ignored) for
    /// its distinct codepoints and builds an alphabet from them, with
    /// [`RESERVED_ROOT_CODEPOINT`] reserved at index 0. Fails with
    /// [`Error::UnknownCharacter`] if any line contains the reserved
    /// codepoint itself.
    pub fn from_dictionary(path: impl AsRef<Path>) -> Result<Self> {
        let words = read_lines(path.as_ref())?;
        let mut codepoints: Vec<char> = Vec::new();
        for word in &words {
            for c in word.chars() {
                if c == RESERVED_ROOT_CODEPOINT {
                    return Err(Error::UnknownCharacter(c));
                }
                if !codepoints.contains(&c) {
                    codepoints.push(c);
                }
            }
        }
        codepoints.sort_unstable();
        let mut ordered = Vec::with_capacity(codepoints.len() + 1);
        ordered.push(RESERVED_ROOT_CODEPOINT);
        ordered.extend(codepoints);
        let alphabet = Alphabet::new(ordered)?;
        log::info!(
            "scanned {:?}: {} words, {} distinct codepoints",
            path.as_ref(),
            words.len(),
            alphabet.len() - 1
        );
        Ok(CharTrieFactory { alphabet })
    }

    /// A fresh, empty builder against this factory's alphabet.
    pub fn create(&self) -> TrieBuilder {
        TrieBuilder::new(self.alphabet.clone())
    }

    /// Convenience: scans `path` for its alphabet, adds every line as a
    /// word, and finalizes with `prune(sort=false, compact=true)`
    /// (spec.md §6's documented builder default).
    pub fn import(path: impl AsRef<Path>) -> Result<FinalizedTrie> {
        let factory = Self::from_dictionary(path.as_ref())?;
        let mut builder = factory.create();
        builder.add_range(read_lines(path.as_ref())?)?;
        let trie = builder.prune(false, true);
        log::info!(
            "imported {:?}: {} words, {} nodes",
            path.as_ref(),
            trie.count(),
            trie.num_nodes()
        );
        Ok(trie)
    }

    /// Writes `trie`'s canonical JSON encoding to `path`.
    pub fn export(trie: &FinalizedTrie, path: impl AsRef<Path>) -> Result<()> {
        let json = SerializedTrie::from(trie).to_json();
        fs::write(path.as_ref(), json).map_err(|e| Error::Io(e.to_string()))?;
        log::info!(
            "exported {:?}: {} words, {} nodes",
            path.as_ref(),
            trie.count(),
            trie.num_nodes()
        );
        Ok(())
    }

    /// Reads and validates a trie previously written by [`Self::export`].
    pub fn load(path: impl AsRef<Path>) -> Result<FinalizedTrie> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
        let dto = SerializedTrie::from_json(&json)?;
        let trie = FinalizedTrie::try_from(dto)?;
        log::info!(
            "loaded {:?}: {} words, {} nodes",
            path.as_ref(),
            trie.count(),
            trie.num_nodes()
        );
        Ok(trie)
    }
}

/// Reads `path` as UTF-8 text, splitting on newlines with trailing blank
/// lines discarded. Lines are returned as-is: no case folding.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Ok(lines)
}
