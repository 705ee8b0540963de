//! Anagram Lexicon
//!
//! The word/anagram engine behind a seven-letter word puzzle: loads a
//! dictionary (plain or gzip-compressed `WORD<TAB>definition` lines),
//! indexes it for fast membership and anagram queries, and answers the
//! queries that drive gameplay - validity checks, subset-anagram search
//! for a letter pool, and exact seven-letter anagram classes for bingo
//! detection.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_lexicon::lexicon::Lexicon;
//! use anagram_lexicon::loader::parse_entries;
//!
//! let entries = parse_entries("CAT\ta small feline\nRETINAS\nSTAINER\n");
//! let lexicon = Lexicon::build("demo", entries);
//!
//! assert!(lexicon.is_valid("cat"));
//! assert_eq!(lexicon.seven_letter_anagrams_of("SANITER").len(), 2);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod loader;

// Lexicon index and queries
pub mod lexicon;

// Round pool generation
pub mod pool;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
