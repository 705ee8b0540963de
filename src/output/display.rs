//! Display functions for command results

use super::formatters::{spaced_letters, word_grid};
use crate::commands::{CheckResult, DealResult, LexiconStats, SolveResult};
use colored::Colorize;

const GRID_COLUMNS: usize = 6;

/// Print the result of a word check
pub fn print_check_result(result: &CheckResult) {
    if result.valid {
        println!(
            "{} {}",
            result.word.bright_yellow().bold(),
            "is a word".green()
        );
        match &result.definition {
            Some(definition) => println!("  {definition}"),
            None => println!("  {}", "(no definition available)".dimmed()),
        }
    } else {
        println!(
            "{} {}",
            result.word.bright_yellow().bold(),
            "is not in the lexicon".red()
        );
    }
}

/// Print a dealt round: the pool and what it holds, but not the answers
pub fn print_deal_result(result: &DealResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "  {}",
        spaced_letters(&result.pool).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nThis round holds {} words:", result.total);
    for (length, count) in &result.solution_counts {
        println!("   {length} letters: {count}");
    }
    println!(
        "   Bingos:    {}",
        result.bingo_count.to_string().bright_green().bold()
    );
}

/// Print the full solution set for a pool
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solutions for: {}",
        spaced_letters(&result.pool).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (length, words) in &result.by_length {
        println!("\n{}", format!("{length} letters ({}):", words.len()).bright_cyan());
        for row in word_grid(words, GRID_COLUMNS) {
            println!("   {row}");
        }
    }

    println!("\nTotal: {} words", result.total);
    if result.bingos.is_empty() {
        println!("{}", "No bingo for this pool".dimmed());
    } else {
        println!(
            "{} {}",
            "Bingos:".bright_green().bold(),
            result.bingos.join(", ").bright_yellow()
        );
    }
}

/// Print the seven-letter anagrams of a pool
pub fn print_bingos(pool: &str, bingos: &[String]) {
    if bingos.is_empty() {
        println!(
            "No seven-letter anagram of {}",
            spaced_letters(pool).bright_yellow()
        );
    } else {
        println!(
            "{} seven-letter anagram(s) of {}:",
            bingos.len(),
            spaced_letters(pool).bright_yellow()
        );
        for word in bingos {
            println!("   {}", word.bright_green().bold());
        }
    }
}

/// Print lexicon statistics
pub fn print_stats(stats: &LexiconStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEXICON STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Source list:      {}", stats.source.bright_yellow());
    println!("   Total words:      {}", stats.total_words);
    for (length, count) in &stats.by_length {
        println!("     {length} letters:     {count}");
    }
    println!("   Anagram classes:  {}", stats.class_count);
    println!("   Multi classes:    {}", stats.multi_class_count);
    if !stats.largest_class.is_empty() {
        println!(
            "   Largest class:    {}",
            stats.largest_class.join(", ").bright_green()
        );
    }
}
