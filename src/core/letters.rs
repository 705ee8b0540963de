//! Letter multiset arithmetic
//!
//! `LetterCounts` tracks per-letter occurrence counts for a pool or candidate
//! word; `Signature` is the canonical sorted-letter key for anagram classes.

use std::fmt;

/// Per-letter occurrence counts over `A..=Z`
///
/// The multiset view of a word or pool: position 0 counts A's, position 25
/// counts Z's. Case-insensitive on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Count the letters of `text`
    ///
    /// Returns `None` if the trimmed input is empty or contains any
    /// non-ASCII-alphabetic character. Malformed pools are a "nothing
    /// matches" result for the queries built on top, never an error.
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut counts = [0u8; 26];
        for byte in text.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            let slot = &mut counts[(byte.to_ascii_uppercase() - b'A') as usize];
            // A word needs at most 7 of any letter, so saturating at 255
            // cannot change a can_form answer
            *slot = slot.saturating_add(1);
        }

        Some(Self(counts))
    }

    /// Check whether `candidate` can be fully formed from this pool
    ///
    /// Multiset containment: each letter occurrence in the pool may back at
    /// most one occurrence of that letter in the candidate. A pool with two
    /// E's can form a word needing two E's but not three.
    #[inline]
    #[must_use]
    pub fn can_form(&self, candidate: &Self) -> bool {
        self.0
            .iter()
            .zip(candidate.0.iter())
            .all(|(have, need)| need <= have)
    }

    /// Total number of letters in the multiset
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&count| usize::from(count)).sum()
    }
}

/// Canonical sorted-letter key for anagram classes
///
/// The uppercase letters of the input sorted ascending. Two strings produce
/// the same signature iff they are letter-for-letter anagrams, so any
/// rescramble of a pool keys the same class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Build the signature of `text`
    ///
    /// Returns `None` if the trimmed input is empty or contains any
    /// non-ASCII-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use anagram_lexicon::core::Signature;
    ///
    /// let a = Signature::from_letters("RETINAS").unwrap();
    /// let b = Signature::from_letters("stainer").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str(), "AEINRST");
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut letters = Vec::with_capacity(text.len());
        for byte in text.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            letters.push(byte.to_ascii_uppercase());
        }
        letters.sort_unstable();

        // Sorted ASCII uppercase bytes are always valid UTF-8
        String::from_utf8(letters).ok().map(Self)
    }

    /// Get the signature as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
