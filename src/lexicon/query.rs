//! Gameplay queries
//!
//! Every query returns a value, never an error: absence is a valid result.
//! Malformed input (non-letters) answers the same way an unknown word does.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::index::Lexicon;
use crate::core::{LetterCounts, Signature, normalize_word};

impl Lexicon {
    /// Case-insensitive membership test
    ///
    /// O(1) expected. Malformed input is simply not a member.
    ///
    /// # Examples
    /// ```
    /// use anagram_lexicon::lexicon::Lexicon;
    /// use anagram_lexicon::loader::parse_entries;
    ///
    /// let lexicon = Lexicon::build("demo", parse_entries("CAT\n"));
    /// assert!(lexicon.is_valid("cat"));
    /// assert!(lexicon.is_valid("CAT"));
    /// assert!(!lexicon.is_valid("dog"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        normalize_word(word).is_ok_and(|word| self.words.contains(&word))
    }

    /// Look up a word's definition
    ///
    /// `None` means "no definition available", not an error.
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        let word = normalize_word(word).ok()?;
        self.definitions.get(&word).map(String::as_str)
    }

    /// All seven-letter words that are exact anagrams of the given letters
    ///
    /// Keys the anagram-class map by the pool's signature, so any rescramble
    /// of the same pool returns the same class. Empty slice when no class
    /// exists or the input is malformed. Member order is first-seen load
    /// order; sort before display if determinism across reloads matters.
    #[must_use]
    pub fn seven_letter_anagrams_of(&self, letters: &str) -> &[String] {
        Signature::from_letters(letters)
            .and_then(|signature| self.classes.get(&signature))
            .map_or(&[], Vec::as_slice)
    }

    /// All words formable from a subset of the given letters, with lengths
    ///
    /// The round's core puzzle-solving primitive: scans the whole word set,
    /// admitting a word only if every letter occurrence it needs is backed
    /// by a distinct pool occurrence. Letter counts are precomputed at build
    /// time and the scan runs in parallel, keeping round starts well under
    /// the interactive budget for dictionaries of tens of thousands of words.
    #[must_use]
    pub fn subset_anagrams_of(&self, letters: &str) -> FxHashMap<String, usize> {
        let Some(pool) = LetterCounts::from_letters(letters) else {
            return FxHashMap::default();
        };

        self.counted
            .par_iter()
            .filter(|(_, counts)| pool.can_form(counts))
            .map(|(word, _)| (word.clone(), word.len()))
            .collect()
    }
}
