//! The fixed, ordered alphabet and its dense codepoint lookup table.

use crate::error::{Error, Result};

/// Codepoints above this value are rejected before any table lookup (the
/// char-map is a `u16`-indexed, ~64 KiB dense table; see spec.md §5).
const CHAR_MAP_LIMIT: u32 = 0x1_0000;

/// Sentinel stored in the char-map for codepoints that are not part of
/// the alphabet.
const NOT_IN_ALPHABET: u8 = 0xFF;

/// Maximum number of distinct codepoints, including the reserved root
/// slot at index 0 (spec.md §3: "`m ≤ 255` ... `C[0]` is reserved").
const MAX_ALPHABET_LEN: usize = 256;

/// Ordered, deduplicated set of codepoints a trie can store, plus a dense
/// `codepoint -> index` table for O(1) lookup.
///
/// `alphabet()[0]` is always the reserved root codepoint; it is never a
/// codepoint a caller's words may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    codepoints: Vec<char>,
    char_map: Box<[u8; CHAR_MAP_LIMIT as usize]>,
}

impl Alphabet {
    /// Builds an alphabet from `codepoints`, where `codepoints[0]` is the
    /// reserved root slot and `codepoints[1..]` are the real alphabet
    /// members. Fails if `codepoints` is empty, has more than 256
    /// entries, or contains a codepoint above `0xFFFF`.
    pub fn new(codepoints: Vec<char>) -> Result<Self> {
        if codepoints.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if codepoints.len() > MAX_ALPHABET_LEN {
            return Err(Error::AlphabetTooLarge);
        }
        let mut char_map = Box::new([NOT_IN_ALPHABET; CHAR_MAP_LIMIT as usize]);
        for (index, &c) in codepoints.iter().enumerate() {
            let code = c as u32;
            if code >= CHAR_MAP_LIMIT {
                return Err(Error::UnknownCharacter(c));
            }
            char_map[code as usize] = index as u8;
        }
        Ok(Alphabet {
            codepoints,
            char_map,
        })
    }

    /// Number of distinct codepoints, including the reserved root slot.
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// The codepoint at alphabet index `i`.
    pub fn codepoint(&self, index: u8) -> char {
        self.codepoints[index as usize]
    }

    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    /// The reserved root codepoint, `codepoints()[0]`.
    pub fn root_codepoint(&self) -> char {
        self.codepoints[0]
    }

    /// Returns the alphabet index of `c`, or `None` if `c` is not a
    /// member (including any codepoint above `0xFFFF`).
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u8> {
        let code = c as u32;
        if code >= CHAR_MAP_LIMIT {
            return None;
        }
        match self.char_map[code as usize] {
            NOT_IN_ALPHABET => None,
            i => Some(i),
        }
    }
}
