//! Lexicon index and query engine
//!
//! The `Lexicon` owns the validated word set, definitions, and precomputed
//! anagram structures; `LexiconEngine` wraps it with source resolution and
//! load-then-swap reloads.

mod engine;
mod index;
mod query;

pub use engine::LexiconEngine;
pub use index::Lexicon;
