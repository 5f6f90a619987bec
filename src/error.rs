//! Error kinds shared by the builder, finalizer, search engine, and
//! serializer.

use std::fmt;

/// Errors produced by the trie core.
///
/// All errors are surfaced to the caller; none are swallowed internally.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `add`/`add_range`/`contains` was called with an empty word.
    #[error("word is empty")]
    EmptyInput,

    /// The input contained a codepoint absent from the trie's alphabet.
    #[error("character {0:?} is not in the trie's alphabet")]
    UnknownCharacter(char),

    /// Alphabet construction was given more than 255 distinct codepoints
    /// (plus the reserved root slot).
    #[error("alphabet has more than 255 distinct codepoints")]
    AlphabetTooLarge,

    /// Alphabet construction was given no codepoints at all.
    ///
    /// Not one of the error kinds spec.md §7 enumerates; added to satisfy
    /// §4.1's "the builder rejects construction with an empty ... alphabet."
    /// See DESIGN.md, Open Question 1.
    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    /// A mutating operation was attempted on a finalized store.
    ///
    /// Unreachable from safe code: `FinalizedTrie` has no mutating
    /// methods, so this is enforced by the type system rather than at
    /// runtime. Kept for parity with spec.md §7's documented error
    /// surface. See DESIGN.md, Open Question 2.
    #[error("trie is locked (already finalized)")]
    Locked,

    /// A pattern failed validation (§4.4) when first used in a search.
    #[error("invalid pattern: {0}")]
    InvalidPattern(PatternValidity),

    /// The deserializer found a structural violation of §3's invariants.
    #[error("corrupt serialized trie: {0}")]
    CorruptSerialization(String),

    /// A dictionary, import, or export file could not be read or written.
    ///
    /// Not part of spec.md §7's list (file I/O is an external
    /// collaborator contract per §1's Non-goals), but `CharTrieFactory`
    /// needs some way to report it; kept as a `String` rather than
    /// wrapping `std::io::Error` directly so `Error` stays `Clone`/`Eq`.
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result of validating a [`crate::pattern::PatternMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternValidity {
    Valid,
    InvalidStartingWildCard,
    InvalidEndingWildCard,
}

impl PatternValidity {
    pub fn is_valid(self) -> bool {
        matches!(self, PatternValidity::Valid)
    }
}

impl fmt::Display for PatternValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternValidity::Valid => write!(f, "valid"),
            PatternValidity::InvalidStartingWildCard => {
                write!(f, "fragment pattern cannot start with a wildcard")
            }
            PatternValidity::InvalidEndingWildCard => {
                write!(f, "fragment pattern cannot end with a wildcard")
            }
        }
    }
}
