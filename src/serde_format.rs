//! The stable JSON wire format: a `SerializedTrie` DTO with single-letter
//! field names (spec.md §4.6/§6), plus validating conversions to and
//! from a [`FinalizedTrie`]. Deserialization re-derives every invariant
//! from §3 rather than trusting the input; any violation is reported as
//! [`Error::CorruptSerialization`] instead of silently building a
//! corrupt store.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::trie::FinalizedTrie;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializedNode {
    f: u32,
    i: u8,
    c: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    w: Option<u8>,
    r: u16,
}

/// The wire format itself: `{"c": [...], "i": [...], "n": [...], "w": N}`.
/// See spec.md §6 for the exact field-by-field layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTrie {
    c: Vec<u16>,
    i: Vec<u32>,
    n: Vec<SerializedNode>,
    w: u32,
}

impl SerializedTrie {
    /// Renders the canonical JSON encoding.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("SerializedTrie contains no non-serializable data")
    }

    /// Parses the canonical JSON encoding. Malformed JSON is reported as
    /// [`Error::CorruptSerialization`], same as a structurally invalid
    /// but well-formed document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::CorruptSerialization(e.to_string()))
    }
}

impl From<&FinalizedTrie> for SerializedTrie {
    fn from(trie: &FinalizedTrie) -> Self {
        let c = trie.alphabet().codepoints().iter().map(|&ch| ch as u16).collect();
        let n = (0..trie.num_nodes())
            .map(|idx| {
                let node = trie.node(idx);
                SerializedNode {
                    f: node.first_child_index,
                    i: node.char_index(),
                    c: node.child_count(),
                    w: node.is_word_end().then_some(1),
                    r: node.remaining_depth() as u16,
                }
            })
            .collect();
        SerializedTrie {
            c,
            i: trie.child_indices.clone(),
            n,
            w: trie.count(),
        }
    }
}

impl TryFrom<SerializedTrie> for FinalizedTrie {
    type Error = Error;

    fn try_from(dto: SerializedTrie) -> Result<FinalizedTrie> {
        let codepoints: Vec<char> = dto
            .c
            .iter()
            .map(|&cp| {
                char::from_u32(cp as u32)
                    .ok_or_else(|| Error::CorruptSerialization(format!("{cp} is not a valid codepoint")))
            })
            .collect::<Result<_>>()?;
        let alphabet = Alphabet::new(codepoints)
            .map_err(|e| Error::CorruptSerialization(format!("invalid alphabet: {e}")))?;

        if dto.n.is_empty() {
            return Err(Error::CorruptSerialization("node list is empty".to_string()));
        }

        let node_count = dto.n.len();
        for (idx, node) in dto.n.iter().enumerate() {
            if node.i as usize >= alphabet.len() {
                return Err(Error::CorruptSerialization(format!(
                    "node {idx} has out-of-range char_index {}",
                    node.i
                )));
            }
            let end = node.f as usize + node.c as usize;
            if end > dto.i.len() {
                return Err(Error::CorruptSerialization(format!(
                    "node {idx} child range {}..{end} exceeds child-index array of length {}",
                    node.f,
                    dto.i.len()
                )));
            }
            if let Some(w) = node.w {
                if w != 1 {
                    return Err(Error::CorruptSerialization(format!(
                        "node {idx} has invalid word-end marker {w}"
                    )));
                }
            }
        }
        for (pos, &child) in dto.i.iter().enumerate() {
            if child as usize >= node_count {
                return Err(Error::CorruptSerialization(format!(
                    "child-index entry {pos} references nonexistent node {child}"
                )));
            }
            if child == 0 {
                return Err(Error::CorruptSerialization(
                    "root node (index 0) referenced as a child".to_string(),
                ));
            }
        }

        let nodes: Vec<Node> = dto
            .n
            .iter()
            .map(|node| Node::new(node.f, node.i, node.c, node.w.is_some(), node.r as u32))
            .collect();

        let expected_word_count = nodes.iter().filter(|n| n.is_word_end()).count() as u32;
        if expected_word_count != dto.w {
            return Err(Error::CorruptSerialization(format!(
                "word count {} does not match {expected_word_count} word-end nodes",
                dto.w
            )));
        }

        let recomputed = recompute_remaining_depth(&nodes, &dto.i);
        for (idx, (stored, expected)) in nodes.iter().zip(recomputed.iter()).enumerate() {
            if stored.remaining_depth() != *expected {
                return Err(Error::CorruptSerialization(format!(
                    "node {idx} has remaining_depth {} but {expected} is implied by its children",
                    stored.remaining_depth()
                )));
            }
        }

        Ok(FinalizedTrie::from_parts(alphabet, nodes, dto.i, dto.w))
    }
}

/// Recomputes `remaining_depth` bottom-up, the same way `finalize.rs`
/// does for a freshly pruned trie. Used only to validate a deserialized
/// node list, not during normal finalization.
fn recompute_remaining_depth(nodes: &[Node], child_indices: &[u32]) -> Vec<u32> {
    let mut depths = vec![0u32; nodes.len()];
    for i in (0..nodes.len()).rev() {
        let node = nodes[i];
        depths[i] = if node.child_count() == 0 {
            0
        } else {
            child_indices[node.child_range()]
                .iter()
                .map(|&child| depths[child as usize])
                .max()
                .unwrap_or(0)
                + 1
        };
    }
    depths
}
