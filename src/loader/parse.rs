//! Line parsing for word/definition sources
//!
//! Each line is `WORD` or `WORD<TAB>definition`. Lines that fail word
//! validation are silently dropped: dictionaries routinely carry stray
//! metadata or formatting lines, and tolerance is the contract here.

use crate::core::Entry;

/// Parse a text body into validated entries
///
/// Splits each line on the first tab only; everything after it is the
/// definition. Invalid and blank lines are skipped, duplicates are kept in
/// order (the index applies last-write-wins for definitions).
///
/// # Examples
/// ```
/// use anagram_lexicon::loader::parse_entries;
///
/// let entries = parse_entries("CAT\ta small feline\nACT\n12AB\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].word, "CAT");
/// assert_eq!(entries[0].definition.as_deref(), Some("a small feline"));
/// assert_eq!(entries[1].definition, None);
/// ```
#[must_use]
pub fn parse_entries(text: &str) -> Vec<Entry> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Entry> {
    let (word, definition) = match line.split_once('\t') {
        Some((word, definition)) => (word, Some(definition)),
        None => (line, None),
    };

    Entry::new(word, definition).ok()
}
