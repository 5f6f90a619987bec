//! The four pattern searches (`find_prefix`, `find_exact`,
//! `find_fragment`, `find_suffix`) plus the `all()` enumerator, all
//! implemented as lazy iterators over an explicit stack so a caller
//! pulling only a few results never forces the whole dictionary to be
//! walked (spec.md §4.5).

use crate::buffer_pool::{self, PooledBuffer};
use crate::error::{Error, Result};
use crate::pattern::{CharMatch, MatchType, PatternMatch};
use crate::trie::FinalizedTrie;

impl FinalizedTrie {
    /// Enumerates every stored word. With `prune(sort=true, ...)`, this
    /// is the sorted enumeration spec.md §4.5.1/§8 relies on; without
    /// it, words come out in whatever order `child_indices` holds them.
    pub fn all(&self) -> AllWords<'_> {
        AllWords::new(self)
    }

    /// Words with `pattern` as a prefix (the pattern itself matches if
    /// it is also a stored word).
    pub fn find_prefix(&self, pattern: &PatternMatch) -> Result<SearchIter<'_>> {
        self.find_with(pattern, true)
    }

    /// Words exactly matching `pattern`, no more and no fewer
    /// characters.
    pub fn find_exact(&self, pattern: &PatternMatch) -> Result<SearchIter<'_>> {
        self.find_with(pattern, false)
    }

    /// Words containing `pattern` as a contiguous substring.
    pub fn find_fragment(&self, pattern: &PatternMatch) -> Result<SearchIter<'_>> {
        self.find_substring(pattern, false)
    }

    /// Words ending with `pattern`.
    pub fn find_suffix(&self, pattern: &PatternMatch) -> Result<SearchIter<'_>> {
        self.find_substring(pattern, true)
    }

    /// Dispatches to the search named by `pattern.match_type()`. An
    /// empty pattern always yields every word, regardless of match type
    /// (spec.md §4.5: "Empty pattern ⇒ `all()` regardless of match
    /// type").
    pub fn find(&self, pattern: &PatternMatch) -> Result<SearchIter<'_>> {
        match pattern.match_type() {
            MatchType::IsPrefix => self.find_prefix(pattern),
            MatchType::IsWord => self.find_exact(pattern),
            MatchType::IsFragment => self.find_fragment(pattern),
            MatchType::IsSuffix => self.find_suffix(pattern),
        }
    }

    fn find_with(&self, pattern: &PatternMatch, enumerate_subtree: bool) -> Result<SearchIter<'_>> {
        if pattern.is_empty() {
            return Ok(SearchIter::All(self.all()));
        }
        if !pattern.validate().is_valid() {
            return Err(Error::InvalidPattern(pattern.validate()));
        }
        Ok(SearchIter::Walk(PatternWalk::new(
            self,
            pattern.items().to_vec(),
            enumerate_subtree,
        )))
    }

    fn find_substring(&self, pattern: &PatternMatch, anchor_end: bool) -> Result<SearchIter<'_>> {
        if pattern.is_empty() {
            return Ok(SearchIter::All(self.all()));
        }
        if !pattern.validate().is_valid() {
            return Err(Error::InvalidPattern(pattern.validate()));
        }
        Ok(SearchIter::Substring(SubstringSearch::new(
            self,
            pattern.items().to_vec(),
            anchor_end,
        )))
    }
}

/// A lazy sequence of matching words, returned by every `find*` method.
/// Duplicate-free and a subset of [`FinalizedTrie::all`] for any valid
/// pattern (spec.md §8).
pub enum SearchIter<'t> {
    All(AllWords<'t>),
    Walk(PatternWalk<'t>),
    Substring(SubstringSearch<'t>),
}

impl<'t> Iterator for SearchIter<'t> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        match self {
            SearchIter::All(iter) => iter.next(),
            SearchIter::Walk(iter) => iter.next(),
            SearchIter::Substring(iter) => iter.next(),
        }
    }
}

/// One step of a depth-first walk: descend into `node` (pushing its
/// character, if any, onto the shared path buffer), or back out of the
/// node most recently descended into (popping the buffer).
enum StackOp {
    Enter(u32, Option<char>),
    Leave,
}

/// DFS enumerator of every word reachable from a start node, prefixed by
/// a fixed string. Children are pushed in reverse alphabet order so that
/// popping the stack visits them in alphabet order (spec.md §4.5.1).
pub struct AllWords<'t> {
    trie: &'t FinalizedTrie,
    stack: Vec<StackOp>,
    path: PooledBuffer,
}

impl<'t> AllWords<'t> {
    fn new(trie: &'t FinalizedTrie) -> Self {
        AllWords {
            trie,
            stack: vec![StackOp::Enter(0, None)],
            path: buffer_pool::checkout(),
        }
    }

    fn push_children(&mut self, node: usize) {
        for &child in self.trie.children(node).iter().rev() {
            let child_node = self.trie.node(child as usize);
            let c = self.trie.alphabet().codepoint(child_node.char_index());
            self.stack.push(StackOp::Enter(child, Some(c)));
        }
    }
}

impl<'t> Iterator for AllWords<'t> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        while let Some(op) = self.stack.pop() {
            match op {
                StackOp::Leave => {
                    self.path.get_mut().pop();
                }
                StackOp::Enter(node_index, c) => {
                    if let Some(c) = c {
                        self.path.get_mut().push(c);
                        self.stack.push(StackOp::Leave);
                    }
                    self.push_children(node_index as usize);
                    if self.trie.node(node_index as usize).is_word_end() {
                        return Some(self.path.as_slice().iter().collect());
                    }
                }
            }
        }
        None
    }
}

/// Mode a [`PatternWalk`] frame is in: still consuming pattern
/// characters (`Matching`), or freely enumerating a subtree once the
/// pattern has been fully matched (`Free`, only reached by prefix
/// search).
#[derive(Clone, Copy)]
enum WalkMode {
    Matching(usize),
    Free,
}

enum WalkOp {
    Enter(u32, Option<char>, WalkMode),
    Leave,
}

/// Implements `find_prefix` (`enumerate_subtree = true`) and
/// `find_exact` (`enumerate_subtree = false`): spec.md §4.5.2/§4.5.3.
///
/// Both walk the trie one pattern character at a time, pruning a
/// subtree when the remaining pattern length exceeds the node's
/// `remaining_depth` (Δ = 0: the match must complete starting at this
/// node). Once depth equals the pattern length, `find_exact` emits iff
/// the node is a word end and stops; `find_prefix` additionally
/// continues an unconstrained enumeration of the whole subtree below
/// that node.
pub struct PatternWalk<'t> {
    trie: &'t FinalizedTrie,
    items: Vec<CharMatch>,
    enumerate_subtree: bool,
    stack: Vec<WalkOp>,
    path: PooledBuffer,
}

impl<'t> PatternWalk<'t> {
    fn new(trie: &'t FinalizedTrie, items: Vec<CharMatch>, enumerate_subtree: bool) -> Self {
        let mut stack = Vec::new();
        let root = 0usize;
        for &child in trie.children(root).iter().rev() {
            let child_node = trie.node(child as usize);
            let c = trie.alphabet().codepoint(child_node.char_index());
            if items[0].matches(c) {
                stack.push(WalkOp::Enter(child, Some(c), WalkMode::Matching(1)));
            }
        }
        PatternWalk {
            trie,
            items,
            enumerate_subtree,
            stack,
            path: buffer_pool::checkout(),
        }
    }

    fn push_free_children(&mut self, node: usize) {
        for &child in self.trie.children(node).iter().rev() {
            let child_node = self.trie.node(child as usize);
            let c = self.trie.alphabet().codepoint(child_node.char_index());
            self.stack.push(WalkOp::Enter(child, Some(c), WalkMode::Free));
        }
    }

    fn push_matching_children(&mut self, node: usize, depth: usize) {
        let next_slot = &self.items[depth];
        for &child in self.trie.children(node).iter().rev() {
            let child_node = self.trie.node(child as usize);
            let c = self.trie.alphabet().codepoint(child_node.char_index());
            if next_slot.matches(c) {
                self.stack
                    .push(WalkOp::Enter(child, Some(c), WalkMode::Matching(depth + 1)));
            }
        }
    }
}

impl<'t> Iterator for PatternWalk<'t> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        let pattern_len = self.items.len();
        while let Some(op) = self.stack.pop() {
            match op {
                WalkOp::Leave => {
                    self.path.get_mut().pop();
                }
                WalkOp::Enter(node_index, c, mode) => {
                    if let Some(c) = c {
                        self.path.get_mut().push(c);
                        self.stack.push(WalkOp::Leave);
                    }
                    let node = *self.trie.node(node_index as usize);
                    match mode {
                        WalkMode::Free => {
                            self.push_free_children(node_index as usize);
                            if node.is_word_end() {
                                return Some(self.path.as_slice().iter().collect());
                            }
                        }
                        WalkMode::Matching(depth) => {
                            let remaining = pattern_len - depth;
                            if remaining > node.remaining_depth() as usize {
                                // Pruned: no further pushes for this node.
                                continue;
                            }
                            if depth == pattern_len {
                                if self.enumerate_subtree {
                                    self.push_free_children(node_index as usize);
                                }
                                if node.is_word_end() {
                                    return Some(self.path.as_slice().iter().collect());
                                }
                            } else {
                                self.push_matching_children(node_index as usize, depth);
                            }
                        }
                    }
                }
            }
        }
        None
    }
}

/// Implements `find_fragment` (`anchor_end = false`) and `find_suffix`
/// (`anchor_end = true`): spec.md §4.5.4/§4.5.5.
///
/// Unlike [`PatternWalk`], this does an unconstrained DFS of the whole
/// trie, buffering the actual characters visited, and tests the pattern
/// against sliding windows of that buffer once enough characters are
/// available. A subtree is pruned when the pattern cannot fit in any
/// word reachable through the current node
/// (`pattern_len > depth + remaining_depth(node)`).
pub struct SubstringSearch<'t> {
    trie: &'t FinalizedTrie,
    items: Vec<CharMatch>,
    anchor_end: bool,
    stack: Vec<StackOp>,
    path: PooledBuffer,
}

impl<'t> SubstringSearch<'t> {
    fn new(trie: &'t FinalizedTrie, items: Vec<CharMatch>, anchor_end: bool) -> Self {
        SubstringSearch {
            trie,
            items,
            anchor_end,
            stack: vec![StackOp::Enter(0, None)],
            path: buffer_pool::checkout(),
        }
    }

    fn window_matches(&self, offset: usize) -> bool {
        let path = self.path.as_slice();
        self.items
            .iter()
            .enumerate()
            .all(|(k, slot)| slot.matches(path[offset + k]))
    }

    /// Whether any window anchored appropriately for this search flavor
    /// matches the buffered path, given the path's current length.
    fn matches_at_depth(&self, depth: usize) -> bool {
        let pattern_len = self.items.len();
        if depth < pattern_len {
            return false;
        }
        if self.anchor_end {
            self.window_matches(depth - pattern_len)
        } else {
            (0..=(depth - pattern_len)).any(|offset| self.window_matches(offset))
        }
    }

    fn push_children(&mut self, node: usize) {
        for &child in self.trie.children(node).iter().rev() {
            let child_node = self.trie.node(child as usize);
            let c = self.trie.alphabet().codepoint(child_node.char_index());
            self.stack.push(StackOp::Enter(child, Some(c)));
        }
    }
}

impl<'t> Iterator for SubstringSearch<'t> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        let pattern_len = self.items.len();
        while let Some(op) = self.stack.pop() {
            match op {
                StackOp::Leave => {
                    self.path.get_mut().pop();
                }
                StackOp::Enter(node_index, c) => {
                    if let Some(c) = c {
                        self.path.get_mut().push(c);
                        self.stack.push(StackOp::Leave);
                    }
                    let node = *self.trie.node(node_index as usize);
                    let depth = self.path.as_slice().len();
                    if pattern_len > depth + node.remaining_depth() as usize {
                        // Pruned: no word through this node can fit the pattern.
                        continue;
                    }
                    self.push_children(node_index as usize);
                    if node.is_word_end() && self.matches_at_depth(depth) {
                        return Some(self.path.as_slice().iter().collect());
                    }
                }
            }
        }
        None
    }
}
