//! A compact, read-optimized character trie/DAWG for large dictionaries.
//!
//! A [`crate::builder::TrieBuilder`] ingests words one at a time, sharing
//! common prefixes as it goes; [`crate::builder::TrieBuilder::prune`]
//! finalizes it into a [`FinalizedTrie`], a flat, packed, immutable
//! store safe for unsynchronized concurrent reads. The finalizer can
//! additionally merge identical subtrees (a directed acyclic word graph,
//! or DAWG) to shrink large dictionaries further.
//!
//! Four search flavors are available against a finalized trie, plus a
//! plain enumerator:
//! - [`FinalizedTrie::contains`], exact membership.
//! - [`FinalizedTrie::all`], every stored word.
//! - [`FinalizedTrie::find_prefix`] / [`FinalizedTrie::find_exact`] /
//!   [`FinalizedTrie::find_fragment`] / [`FinalizedTrie::find_suffix`],
//!   pattern search, where each pattern slot ([`pattern::CharMatch`]) may
//!   be a literal codepoint, a wildcard, or a codepoint plus alternatives.
//!
//! [`factory::CharTrieFactory`] builds a trie from a line-delimited
//! dictionary file and round-trips finalized tries through the JSON
//! format documented on [`serde_format::SerializedTrie`].
//!
//! ```
//! use chartrie::{Alphabet, PatternMatch, TrieBuilder};
//!
//! let alphabet = Alphabet::new("\0abc".chars().collect()).unwrap();
//! let mut builder = TrieBuilder::new(alphabet);
//! builder.add_range(["ab", "abc"]).unwrap();
//! let trie = builder.prune(true, true);
//!
//! assert_eq!(trie.contains("ab"), Ok(true));
//! assert_eq!(trie.find_prefix(&PatternMatch::from_prefix("ab")).unwrap().count(), 2);
//! ```

pub mod alphabet;
mod buffer_pool;
pub mod builder;
pub mod error;
pub mod factory;
mod finalize;
mod node;
pub mod pattern;
pub mod search;
pub mod serde_format;
pub mod trie;

pub use alphabet::Alphabet;
pub use builder::TrieBuilder;
pub use error::{Error, PatternValidity, Result};
pub use factory::CharTrieFactory;
pub use pattern::{CharMatch, MatchType, PatternMatch};
pub use search::SearchIter;
pub use serde_format::SerializedTrie;
pub use trie::FinalizedTrie;
