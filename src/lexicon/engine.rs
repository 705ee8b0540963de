//! Engine facade
//!
//! The single owned instance the application holds. Reloads follow a
//! load-then-swap discipline: the candidate lexicon is fully built before
//! the active one is replaced, so a failed reload leaves the previous
//! state intact and queryable.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::index::Lexicon;
use crate::loader::{ListTag, LoadError, SourceResolver, entries_from_path};
use crate::pool;

/// Owns the active lexicon and the source resolver
///
/// Constructed empty; populated by [`load`](Self::load). Queries take
/// `&self`, reloads take `&mut self`, so the borrow checker enforces the
/// single-threaded no-query-during-reload contract.
pub struct LexiconEngine {
    resolver: SourceResolver,
    lexicon: Lexicon,
}

impl LexiconEngine {
    /// Create an empty engine with the given source resolver
    #[must_use]
    pub fn new(resolver: SourceResolver) -> Self {
        Self {
            resolver,
            lexicon: Lexicon::empty(),
        }
    }

    /// Load (or reload) the word list identified by `tag`
    ///
    /// # Errors
    /// Returns `LoadError` if no source in the fallback chain yields a
    /// usable list. On failure the previously loaded lexicon, if any,
    /// remains active.
    pub fn load(&mut self, tag: ListTag) -> Result<(), LoadError> {
        let entries = self.resolver.resolve(tag)?;
        if entries.is_empty() {
            return Err(LoadError::EmptyLexicon);
        }

        // Swap only after the candidate is fully built
        self.lexicon = Lexicon::build(tag.as_str(), entries);
        Ok(())
    }

    /// Load a word list from an explicitly named file
    ///
    /// # Errors
    /// Returns `LoadError` on read, decode, or empty-list failure; the
    /// previous lexicon stays active.
    pub fn load_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let entries = entries_from_path(path)?;
        self.lexicon = Lexicon::build(path.display().to_string(), entries);
        Ok(())
    }

    /// Switch to a different word list
    ///
    /// A full reload of the new source; identical failure semantics to
    /// [`load`](Self::load).
    pub fn switch_word_list(&mut self, tag: ListTag) -> Result<(), LoadError> {
        self.load(tag)
    }

    /// True once a non-empty list has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.lexicon.is_empty()
    }

    /// The active lexicon (empty before the first successful load)
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Case-insensitive word validity check
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.lexicon.is_valid(word)
    }

    /// Definition lookup; `None` means "no definition available"
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.lexicon.definition(word)
    }

    /// Exact seven-letter anagrams of the given letters
    #[must_use]
    pub fn seven_letter_anagrams_of(&self, letters: &str) -> &[String] {
        self.lexicon.seven_letter_anagrams_of(letters)
    }

    /// All words formable from a subset of the given letters
    #[must_use]
    pub fn subset_anagrams_of(&self, letters: &str) -> FxHashMap<String, usize> {
        self.lexicon.subset_anagrams_of(letters)
    }

    /// Uniform random seven-letter word, `None` if the list has none
    #[must_use]
    pub fn random_seven_letter_word(&self) -> Option<&str> {
        pool::random_seven_letter_word(&self.lexicon, &mut rand::rng())
    }

    /// Random member of a multi-member anagram class, `None` if there is none
    #[must_use]
    pub fn random_multi_anagram_word(&self) -> Option<&str> {
        pool::random_multi_anagram_word(&self.lexicon, &mut rand::rng())
    }
}
