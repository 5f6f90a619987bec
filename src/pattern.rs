//! The pattern language: a single character slot (`CharMatch`, with an
//! optional wildcard and alternative characters) composed into an
//! ordered `PatternMatch` with a match-type discriminator. See
//! spec.md §3/§4.4.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};

use derive_new::new;

use crate::error::PatternValidity;

/// A single pattern slot: either a wildcard (`primary = None`, matches
/// any codepoint) or a primary codepoint, optionally widened by a set of
/// accepted alternatives.
#[derive(Debug, Clone, new)]
pub struct CharMatch {
    primary: Option<char>,
    #[new(default)]
    alternatives: Option<Vec<char>>,
}

impl CharMatch {
    /// A wildcard slot, matching any codepoint.
    pub fn wildcard() -> Self {
        CharMatch {
            primary: None,
            alternatives: None,
        }
    }

    /// A slot matching exactly `c`.
    pub fn literal(c: char) -> Self {
        CharMatch {
            primary: Some(c),
            alternatives: None,
        }
    }

    /// A slot matching `primary` or any of `alternatives`.
    pub fn with_alternatives(primary: char, alternatives: Vec<char>) -> Self {
        CharMatch {
            primary: Some(primary),
            alternatives: Some(alternatives),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.primary.is_none()
    }

    pub fn primary(&self) -> Option<char> {
        self.primary
    }

    pub fn alternatives(&self) -> Option<&[char]> {
        self.alternatives.as_deref()
    }

    /// Returns whether `c` satisfies this slot: true if this is a
    /// wildcard, if `c` equals the primary, or if `c` is one of the
    /// alternatives.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self.primary {
            None => true,
            Some(p) if p == c => true,
            Some(_) => self
                .alternatives
                .as_ref()
                .is_some_and(|alts| alts.contains(&c)),
        }
    }

    /// The regex fragment for this slot (no surrounding anchors):
    /// `.` for a wildcard, the literal character for a primary-only
    /// slot, or `[p|a1|a2|...]` for a primary with alternatives.
    pub fn to_regex_fragment(&self) -> String {
        match (&self.primary, &self.alternatives) {
            (None, _) => ".".to_string(),
            (Some(p), None) => p.to_string(),
            (Some(p), Some(alts)) => {
                let mut fragment = String::from("[");
                fragment.push(*p);
                for alt in alts {
                    fragment.push('|');
                    fragment.push(*alt);
                }
                fragment.push(']');
                fragment
            }
        }
    }
}

/// Equality/hashing is derived from the regex-string projection
/// (spec.md §3: "Equality/hashing of `CharMatch` may be derived from its
/// regex-string projection"), so slots with reordered-but-equivalent
/// alternative sets can legitimately compare unequal, since the
/// projection, not set membership, is the contract.
impl PartialEq for CharMatch {
    fn eq(&self, other: &Self) -> bool {
        self.to_regex_fragment() == other.to_regex_fragment()
    }
}
impl Eq for CharMatch {}

impl Hash for CharMatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_regex_fragment().hash(state);
    }
}

/// Which of the four search flavors a [`PatternMatch`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    IsPrefix,
    IsFragment,
    IsWord,
    IsSuffix,
}

/// An ordered sequence of [`CharMatch`] slots plus a [`MatchType`].
///
/// Validation results are cached (invalidated by any mutating method),
/// per spec.md §4.4.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    items: Vec<CharMatch>,
    match_type: MatchType,
    validity_cache: Cell<Option<PatternValidity>>,
}

impl PatternMatch {
    pub fn new(items: Vec<CharMatch>, match_type: MatchType) -> Self {
        PatternMatch {
            items,
            match_type,
            validity_cache: Cell::new(None),
        }
    }

    /// Builds an all-literal prefix pattern from a plain string.
    pub fn from_prefix(s: &str) -> Self {
        Self::new(s.chars().map(CharMatch::literal).collect(), MatchType::IsPrefix)
    }

    /// Builds an all-literal suffix pattern from a plain string.
    pub fn from_suffix(s: &str) -> Self {
        Self::new(s.chars().map(CharMatch::literal).collect(), MatchType::IsSuffix)
    }

    /// Builds an all-literal fragment pattern from a plain string.
    pub fn from_fragment(s: &str) -> Self {
        Self::new(s.chars().map(CharMatch::literal).collect(), MatchType::IsFragment)
    }

    /// Builds an all-literal whole-word pattern from a plain string.
    pub fn from_word(s: &str) -> Self {
        Self::new(s.chars().map(CharMatch::literal).collect(), MatchType::IsWord)
    }

    pub fn items(&self) -> &[CharMatch] {
        &self.items
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a slot, invalidating the cached validation result.
    pub fn push(&mut self, item: CharMatch) {
        self.items.push(item);
        self.validity_cache.set(None);
    }

    /// Changes the match type, invalidating the cached validation
    /// result.
    pub fn set_match_type(&mut self, match_type: MatchType) {
        self.match_type = match_type;
        self.validity_cache.set(None);
    }

    /// Validates the pattern: invalid iff `match_type = IsFragment` and
    /// the first or last slot is a wildcard. Caches the result until the
    /// next mutation.
    pub fn validate(&self) -> PatternValidity {
        if let Some(cached) = self.validity_cache.get() {
            return cached;
        }
        let validity = self.validate_uncached();
        self.validity_cache.set(Some(validity));
        validity
    }

    fn validate_uncached(&self) -> PatternValidity {
        if self.match_type != MatchType::IsFragment {
            return PatternValidity::Valid;
        }
        match (self.items.first(), self.items.last()) {
            (Some(first), _) if first.is_wildcard() => PatternValidity::InvalidStartingWildCard,
            (_, Some(last)) if last.is_wildcard() => PatternValidity::InvalidEndingWildCard,
            _ => PatternValidity::Valid,
        }
    }

    /// Renders the pattern as a regex string. Presentation aid only; not
    /// used by the search engine.
    pub fn to_regex(&self) -> String {
        let body: String = self.items.iter().map(CharMatch::to_regex_fragment).collect();
        match self.match_type {
            MatchType::IsWord => body,
            MatchType::IsPrefix => format!("{body}.*"),
            MatchType::IsSuffix => format!(".*{body}"),
            MatchType::IsFragment => format!(".*{body}.*"),
        }
    }
}

impl fmt::Display for PatternMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_regex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_anything() {
        let slot = CharMatch::wildcard();
        assert!(slot.matches('a'));
        assert!(slot.matches('!'));
    }

    #[test]
    fn literal_matches_only_itself() {
        let slot = CharMatch::literal('a');
        assert!(slot.matches('a'));
        assert!(!slot.matches('b'));
    }

    #[test]
    fn alternatives_extend_primary() {
        let slot = CharMatch::with_alternatives('a', vec!['b', 'c']);
        assert!(slot.matches('a'));
        assert!(slot.matches('b'));
        assert!(slot.matches('c'));
        assert!(!slot.matches('d'));
    }

    #[test]
    fn fragment_rejects_leading_wildcard() {
        let pattern = PatternMatch::new(
            vec![CharMatch::wildcard(), CharMatch::literal('a')],
            MatchType::IsFragment,
        );
        assert_eq!(pattern.validate(), PatternValidity::InvalidStartingWildCard);
    }

    #[test]
    fn fragment_rejects_trailing_wildcard() {
        let pattern = PatternMatch::new(
            vec![CharMatch::literal('a'), CharMatch::wildcard()],
            MatchType::IsFragment,
        );
        assert_eq!(pattern.validate(), PatternValidity::InvalidEndingWildCard);
    }

    #[test]
    fn leading_wildcard_allowed_outside_fragment() {
        let pattern = PatternMatch::new(
            vec![CharMatch::wildcard(), CharMatch::literal('a')],
            MatchType::IsPrefix,
        );
        assert_eq!(pattern.validate(), PatternValidity::Valid);
    }

    #[test]
    fn cache_invalidates_on_mutation() {
        let mut pattern = PatternMatch::new(vec![CharMatch::literal('a')], MatchType::IsFragment);
        assert_eq!(pattern.validate(), PatternValidity::Valid);
        pattern.push(CharMatch::wildcard());
        assert_eq!(pattern.validate(), PatternValidity::InvalidEndingWildCard);
    }

    #[test]
    fn to_regex_wraps_by_match_type() {
        let pattern = PatternMatch::from_prefix("ab");
        assert_eq!(pattern.to_regex(), "ab.*");
        let pattern = PatternMatch::from_suffix("ab");
        assert_eq!(pattern.to_regex(), ".*ab");
        let pattern = PatternMatch::from_fragment("ab");
        assert_eq!(pattern.to_regex(), ".*ab.*");
        let pattern = PatternMatch::from_word("ab");
        assert_eq!(pattern.to_regex(), "ab");
    }

    #[test]
    fn regex_fragment_with_alternatives() {
        let slot = CharMatch::with_alternatives('o', vec!['0']);
        assert_eq!(slot.to_regex_fragment(), "[o|0]");
    }
}
