//! Core domain types for the anagram lexicon
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod entry;
mod letters;

pub use entry::{Entry, MAX_WORD_LEN, MIN_WORD_LEN, WordError, normalize_word};
pub use letters::{LetterCounts, Signature};
