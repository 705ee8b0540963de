//! Lexicon statistics command

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::lexicon::LexiconEngine;

/// Summary statistics for the active lexicon
pub struct LexiconStats {
    pub source: String,
    pub total_words: usize,
    /// Word counts per length, ascending
    pub by_length: Vec<(usize, usize)>,
    pub class_count: usize,
    /// Classes with two or more members (multi-bingo pools)
    pub multi_class_count: usize,
    /// Members of the largest anagram class, sorted
    pub largest_class: Vec<String>,
}

/// Compute statistics for the active lexicon
#[must_use]
pub fn lexicon_stats(engine: &LexiconEngine) -> LexiconStats {
    let lexicon = engine.lexicon();

    let mut by_length = Vec::new();
    for length in MIN_WORD_LEN..=MAX_WORD_LEN {
        let count = lexicon.words().filter(|word| word.len() == length).count();
        if count > 0 {
            by_length.push((length, count));
        }
    }

    let multi_class_count = lexicon
        .anagram_classes()
        .filter(|class| class.len() >= 2)
        .count();

    let mut largest_class: Vec<String> = lexicon
        .anagram_classes()
        .max_by_key(|class| class.len())
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    largest_class.sort_unstable();

    LexiconStats {
        source: lexicon.source().to_string(),
        total_words: lexicon.word_count(),
        by_length,
        class_count: lexicon.class_count(),
        multi_class_count,
        largest_class,
    }
}
