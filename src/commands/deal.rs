//! Round dealing command
//!
//! Seeds a round from a random seven-letter word and summarizes what the
//! round holds, without listing the solutions (that would spoil the puzzle).

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::lexicon::LexiconEngine;
use crate::pool;

/// A dealt round
pub struct DealResult {
    /// The scrambled pool letters
    pub pool: String,
    /// Playable word counts per length, ascending
    pub solution_counts: Vec<(usize, usize)>,
    /// Number of seven-letter words that use the whole pool
    pub bingo_count: usize,
    /// Total playable words
    pub total: usize,
}

/// Deal a new round
///
/// Picks a random seven-letter seed word (restricted to multi-member
/// anagram classes when `multi` is set), scrambles its letters, and counts
/// the playable words. Returns `None` when the lexicon has no qualifying
/// seed word - the unplayable-dictionary state.
pub fn deal_pool<R: Rng + ?Sized>(
    engine: &LexiconEngine,
    rng: &mut R,
    multi: bool,
) -> Option<DealResult> {
    let lexicon = engine.lexicon();
    let seed = if multi {
        pool::random_multi_anagram_word(lexicon, rng)?
    } else {
        pool::random_seven_letter_word(lexicon, rng)?
    };

    let solutions = lexicon.subset_anagrams_of(seed);
    let bingo_count = lexicon.seven_letter_anagrams_of(seed).len();

    let mut solution_counts = Vec::new();
    for length in MIN_WORD_LEN..=MAX_WORD_LEN {
        let count = solutions.values().filter(|&&len| len == length).count();
        if count > 0 {
            solution_counts.push((length, count));
        }
    }

    let mut letters: Vec<u8> = seed.bytes().collect();
    letters.shuffle(rng);

    Some(DealResult {
        pool: String::from_utf8(letters).ok()?,
        solution_counts,
        bingo_count,
        total: solutions.len(),
    })
}
