//! Bundled word lists
//!
//! Compiled-in fallbacks so the game is playable with no files on disk.
//! Real deployments point the resolver at a full dictionary directory.

/// Everyday-vocabulary list (the "common" tag)
pub const COMMON_TSV: &str = include_str!("../../data/common.tsv");

/// Superset list with rarer words (the "full" tag)
pub const FULL_TSV: &str = include_str!("../../data/full.tsv");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_WORD_LEN;
    use crate::loader::parse_entries;

    #[test]
    fn common_list_parses_to_entries() {
        let entries = parse_entries(COMMON_TSV);
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|e| e.definition.is_some()));
    }

    #[test]
    fn full_list_is_superset_of_common() {
        let common = parse_entries(COMMON_TSV);
        let full = parse_entries(FULL_TSV);

        let full_words: std::collections::HashSet<&str> =
            full.iter().map(|e| e.word.as_str()).collect();

        for entry in &common {
            assert!(
                full_words.contains(entry.word.as_str()),
                "Common word '{}' missing from full list",
                entry.word
            );
        }
    }

    #[test]
    fn common_list_has_seven_letter_words() {
        let entries = parse_entries(COMMON_TSV);
        assert!(entries.iter().any(|e| e.word.len() == MAX_WORD_LEN));
    }

    #[test]
    fn embedded_lines_all_accepted() {
        // Bundled lists are curated; nothing should be silently dropped
        for tsv in [COMMON_TSV, FULL_TSV] {
            let lines = tsv.lines().filter(|l| !l.trim().is_empty()).count();
            assert_eq!(parse_entries(tsv).len(), lines);
        }
    }
}
