//! The lexicon index
//!
//! Built once per load in a single pass over the parsed entries. All derived
//! structures (feasibility index, seven-letter list, anagram classes) are
//! computed here so queries are pure lookups or bounded scans.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Entry, LetterCounts, MAX_WORD_LEN, Signature};

/// The indexed dictionary for one loaded word list
///
/// Owns exactly one word set, one definition map, one flat seven-letter
/// list, and one anagram-class map. Replaced wholesale on a list switch,
/// never updated incrementally.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Which source list is loaded ("common", "full", or a file path)
    pub(crate) source: String,
    /// Authoritative word membership
    pub(crate) words: FxHashSet<String>,
    /// Definitions; key absence means "no definition available"
    pub(crate) definitions: FxHashMap<String, String>,
    /// Per-word letter counts, precomputed for the subset-anagram scan
    pub(crate) counted: Vec<(String, LetterCounts)>,
    /// Flat list of all seven-letter words, for round seeding
    pub(crate) seven: Vec<String>,
    /// Seven-letter anagram classes keyed by sorted-letter signature
    pub(crate) classes: FxHashMap<Signature, Vec<String>>,
}

impl Lexicon {
    /// The unloaded state: every query answers "nothing"
    #[must_use]
    pub fn empty() -> Self {
        Self {
            source: String::new(),
            words: FxHashSet::default(),
            definitions: FxHashMap::default(),
            counted: Vec::new(),
            seven: Vec::new(),
            classes: FxHashMap::default(),
        }
    }

    /// Build the index from parsed entries
    ///
    /// Entries are already validated. Duplicate words are idempotent for
    /// membership; a later definition overwrites an earlier one. Class
    /// member order is first-seen entry order.
    #[must_use]
    pub fn build(source: impl Into<String>, entries: Vec<Entry>) -> Self {
        let mut words = FxHashSet::default();
        let mut definitions = FxHashMap::default();
        let mut counted = Vec::new();
        let mut seven = Vec::new();
        let mut classes: FxHashMap<Signature, Vec<String>> = FxHashMap::default();

        for entry in entries {
            let Entry { word, definition } = entry;

            if words.insert(word.clone()) {
                if let Some(counts) = LetterCounts::from_letters(&word) {
                    counted.push((word.clone(), counts));
                }
                if word.len() == MAX_WORD_LEN {
                    if let Some(signature) = Signature::from_letters(&word) {
                        classes.entry(signature).or_default().push(word.clone());
                    }
                    seven.push(word.clone());
                }
            }

            // Last write wins for definitions
            if let Some(definition) = definition {
                definitions.insert(word, definition);
            }
        }

        Self {
            source: source.into(),
            words,
            definitions,
            counted,
            seven,
            classes,
        }
    }

    /// Which source list is loaded
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Total number of words in the set
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// True if no list has been loaded (or the list was empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All seven-letter words, in entry order
    #[must_use]
    pub fn seven_letter_words(&self) -> &[String] {
        &self.seven
    }

    /// Iterate all words (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Iterate the seven-letter anagram classes (unordered)
    pub fn anagram_classes(&self) -> impl Iterator<Item = &[String]> {
        self.classes.values().map(Vec::as_slice)
    }

    /// Number of distinct anagram classes
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
