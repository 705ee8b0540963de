//! Pool solving commands
//!
//! `solve_pool` finds every playable word for a pool of letters;
//! `find_bingos` restricts to the exact seven-letter anagrams.

use crate::core::{LetterCounts, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::lexicon::LexiconEngine;

/// Result of solving a letter pool
pub struct SolveResult {
    /// The pool, normalized to uppercase
    pub pool: String,
    /// Playable words grouped by length, ascending; words sorted within a group
    pub by_length: Vec<(usize, Vec<String>)>,
    /// The exact seven-letter anagrams of the pool, sorted
    pub bingos: Vec<String>,
    /// Total playable words
    pub total: usize,
}

/// Find every word formable from the pool, grouped by length
///
/// # Errors
/// Returns an error message if the pool contains non-letter characters.
pub fn solve_pool(engine: &LexiconEngine, letters: &str) -> Result<SolveResult, String> {
    let pool = normalize_pool(letters)?;
    let solutions = engine.subset_anagrams_of(&pool);

    let mut by_length: Vec<(usize, Vec<String>)> = Vec::new();
    for length in MIN_WORD_LEN..=MAX_WORD_LEN {
        let mut words: Vec<String> = solutions
            .iter()
            .filter(|&(_, &len)| len == length)
            .map(|(word, _)| word.clone())
            .collect();
        if words.is_empty() {
            continue;
        }
        words.sort_unstable();
        by_length.push((length, words));
    }

    let mut bingos: Vec<String> = engine.seven_letter_anagrams_of(&pool).to_vec();
    bingos.sort_unstable();

    Ok(SolveResult {
        pool,
        total: solutions.len(),
        by_length,
        bingos,
    })
}

/// Find the exact seven-letter anagrams of the pool, sorted
///
/// # Errors
/// Returns an error message if the pool contains non-letter characters.
pub fn find_bingos(engine: &LexiconEngine, letters: &str) -> Result<Vec<String>, String> {
    let pool = normalize_pool(letters)?;
    let mut bingos: Vec<String> = engine.seven_letter_anagrams_of(&pool).to_vec();
    bingos.sort_unstable();
    Ok(bingos)
}

fn normalize_pool(letters: &str) -> Result<String, String> {
    if LetterCounts::from_letters(letters).is_none() {
        return Err(format!("Pool '{letters}' must contain only letters"));
    }
    Ok(letters.trim().to_ascii_uppercase())
}
