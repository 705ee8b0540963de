//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_bingos, print_check_result, print_deal_result, print_solve_result, print_stats};
