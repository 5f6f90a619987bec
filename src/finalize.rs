//! The finalization pipeline: flatten child buffers, optionally merge
//! identical subtrees into a DAWG, compact to reachable nodes, and
//! compute `remaining_depth`. See spec.md §4.3.

use std::collections::{HashMap, VecDeque};

use crate::builder::TrieBuilder;
use crate::node::{self, Node};
use crate::trie::FinalizedTrie;

pub(crate) fn prune(builder: TrieBuilder, sort: bool, compact: bool) -> FinalizedTrie {
    let (alphabet, builder_nodes, mut child_buffers, word_count) = builder.into_parts();

    // --- Step 1: flatten builder-side child buffers into one flat array.
    let mut child_indices: Vec<u32> = Vec::new();
    let mut nodes: Vec<Node> = Vec::with_capacity(builder_nodes.len());
    for (i, bnode) in builder_nodes.iter().enumerate() {
        let buffer = &mut child_buffers[i];
        if sort {
            buffer.sort_by_key(|&child| builder_nodes[child as usize].char_index);
        }
        let first_child_index = child_indices.len() as u32;
        let child_count = buffer.len();
        child_indices.extend_from_slice(buffer);
        nodes.push(Node::new(
            first_child_index,
            bnode.char_index,
            child_count as u8,
            bnode.is_word_end,
            0,
        ));
    }
    log::debug!(
        "flattened {} nodes, {} child-index entries",
        nodes.len(),
        child_indices.len()
    );

    // --- Step 2: DAWG minimization.
    if compact {
        let merged = dawg_minimize(&nodes, &mut child_indices);
        log::debug!("dawg minimization merged {merged} nodes");
    }

    // --- Step 3: reachability & compaction (unconditional; a no-op
    // renumbering when step 2 did not run or merged nothing).
    let (nodes, child_indices) = compact_reachable(&nodes, &child_indices);
    log::debug!("compacted to {} reachable nodes", nodes.len());

    // --- Step 4: remaining-depth.
    let mut nodes = nodes;
    compute_remaining_depth(&mut nodes, &child_indices);

    FinalizedTrie::from_parts(alphabet, nodes, child_indices, word_count)
}

/// Structural fingerprint of a node once its children are already
/// canonicalized: `(char_index, is_word_end, child_count, child ids)`.
type Fingerprint = (u8, bool, u8, Box<[u32]>);

/// Merges identical subtrees. Traverses from the last node to the first:
/// because nodes are appended in insertion order, every node's children
/// already have higher indices, so by the time node `i` is visited its
/// children have already been canonicalized. Uses an inverted index
/// (node id -> positions referencing it in `child_indices`) so a merge
/// costs O(references to the merged node) rather than a full rescan, per
/// spec.md §9's note on merge cost.
///
/// Returns the number of nodes merged away.
fn dawg_minimize(nodes: &[Node], child_indices: &mut [u32]) -> usize {
    let n = nodes.len();
    let mut positions: Vec<Vec<u32>> = vec![Vec::new(); n];
    for (pos, &child) in child_indices.iter().enumerate() {
        positions[child as usize].push(pos as u32);
    }

    let mut fingerprints: HashMap<Fingerprint, u32> = HashMap::with_capacity(n);
    let mut merged = 0usize;

    for i in (0..n).rev() {
        let node = nodes[i];
        let key: Box<[u32]> = child_indices[node.child_range()].into();
        let fingerprint: Fingerprint = (node.char_index(), node.is_word_end(), node.child_count(), key);

        if let Some(&canonical) = fingerprints.get(&fingerprint) {
            let refs = std::mem::take(&mut positions[i]);
            for &pos in &refs {
                child_indices[pos as usize] = canonical;
            }
            positions[canonical as usize].extend(refs);
            merged += 1;
        } else {
            fingerprints.insert(fingerprint, i as u32);
        }
    }
    merged
}

/// Breadth-first reachability from the root, then a contiguous
/// renumbering that preserves the relative order of surviving nodes
/// (and therefore preserves "every child has a higher index than its
/// parent", which [`compute_remaining_depth`] depends on).
fn compact_reachable(nodes: &[Node], child_indices: &[u32]) -> (Vec<Node>, Vec<u32>) {
    let n = nodes.len();
    let mut reachable = vec![false; n];
    reachable[0] = true;
    let mut queue: VecDeque<u32> = VecDeque::new();
    queue.push_back(0);
    while let Some(i) = queue.pop_front() {
        for &child in &child_indices[nodes[i as usize].child_range()] {
            if !reachable[child as usize] {
                reachable[child as usize] = true;
                queue.push_back(child);
            }
        }
    }

    let reachable_old: Vec<u32> = (0..n as u32).filter(|&i| reachable[i as usize]).collect();
    let mut old_to_new = vec![u32::MAX; n];
    for (new_index, &old_index) in reachable_old.iter().enumerate() {
        old_to_new[old_index as usize] = new_index as u32;
    }

    let mut new_child_indices = Vec::with_capacity(child_indices.len());
    let mut new_nodes = Vec::with_capacity(reachable_old.len());
    for &old_index in &reachable_old {
        let node = nodes[old_index as usize];
        let first_child_index = new_child_indices.len() as u32;
        for &child in &child_indices[node.child_range()] {
            new_child_indices.push(old_to_new[child as usize]);
        }
        new_nodes.push(Node::new(
            first_child_index,
            node.char_index(),
            node.child_count(),
            node.is_word_end(),
            0,
        ));
    }
    (new_nodes, new_child_indices)
}

/// Computes `remaining_depth` for every node in a single reverse pass,
/// relying on [`compact_reachable`]'s order-preserving renumbering.
fn compute_remaining_depth(nodes: &mut [Node], child_indices: &[u32]) {
    for i in (0..nodes.len()).rev() {
        let current = nodes[i];
        let remaining_depth = if current.child_count() == 0 {
            0
        } else {
            child_indices[current.child_range()]
                .iter()
                .map(|&child| nodes[child as usize].remaining_depth())
                .max()
                .unwrap_or(0)
                + 1
        };
        node::set_remaining_depth(&mut nodes[i], remaining_depth);
    }
}
