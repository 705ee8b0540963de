//! Command implementations

pub mod check;
pub mod deal;
pub mod solve;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use deal::{DealResult, deal_pool};
pub use solve::{SolveResult, find_bingos, solve_pool};
pub use stats::{LexiconStats, lexicon_stats};
