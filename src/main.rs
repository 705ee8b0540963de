//! Anagram Lexicon - CLI
//!
//! Deals seven-letter pools, solves them, and answers word/definition
//! queries against a loadable dictionary.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use anagram_lexicon::{
    commands::{check_word, deal_pool, find_bingos, lexicon_stats, solve_pool},
    lexicon::LexiconEngine,
    loader::{ListTag, SourceResolver},
    output::{
        print_bingos, print_check_result, print_deal_result, print_solve_result, print_stats,
    },
};

#[derive(Parser)]
#[command(
    name = "anagram_lexicon",
    about = "Seven-letter anagram puzzle lexicon: deal, solve, and check words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'common' (default), 'full', or path to a .tsv/.tsv.gz file
    #[arg(short = 'w', long, global = true, default_value = "common")]
    wordlist: String,

    /// Extra directory to search for word list files (repeatable)
    #[arg(short = 'd', long = "data-dir", global = true)]
    data_dirs: Vec<PathBuf>,

    /// RNG seed for reproducible deals
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal a random seven-letter pool (default)
    Deal {
        /// Require a pool with two or more bingo answers
        #[arg(short, long)]
        multi: bool,
    },

    /// List every playable word for a pool of letters
    Solve {
        /// The pool letters, any order
        letters: String,
    },

    /// List the exact seven-letter anagrams of a pool
    Bingos {
        /// The pool letters, any order
        letters: String,
    },

    /// Check whether a word is playable and show its definition
    Check {
        /// The word to check
        word: String,
    },

    /// Show statistics for the loaded lexicon
    Stats,
}

/// Load the engine per the -w flag: a named list or a custom file path
fn load_engine(wordlist: &str, data_dirs: Vec<PathBuf>) -> Result<LexiconEngine> {
    let resolver = SourceResolver::with_dirs(data_dirs);
    let mut engine = LexiconEngine::new(resolver);

    match ListTag::from_name(wordlist) {
        Some(tag) => engine
            .load(tag)
            .with_context(|| format!("No lexicon available for list '{tag}'"))?,
        None => engine
            .load_path(Path::new(wordlist))
            .with_context(|| format!("No lexicon available at '{wordlist}'"))?,
    }

    Ok(engine)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = load_engine(&cli.wordlist, cli.data_dirs)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to dealing a round if no command given
    let command = cli.command.unwrap_or(Commands::Deal { multi: false });

    match command {
        Commands::Deal { multi } => {
            let result = deal_pool(&engine, &mut rng, multi)
                .ok_or_else(|| anyhow!("No seven-letter word available in this lexicon"))?;
            print_deal_result(&result);
        }
        Commands::Solve { letters } => {
            let result = solve_pool(&engine, &letters).map_err(|e| anyhow!(e))?;
            print_solve_result(&result);
        }
        Commands::Bingos { letters } => {
            let bingos = find_bingos(&engine, &letters).map_err(|e| anyhow!(e))?;
            print_bingos(&letters, &bingos);
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&engine, &word));
        }
        Commands::Stats => {
            print_stats(&lexicon_stats(&engine));
        }
    }

    Ok(())
}
