//! Puzzle generator - CLI
//!
//! Demo binary exercising the three generators over the embedded word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use puzzlegen::{
    core::{Feedback, Word},
    dictionary::Dictionary,
    hashtag::HashtagFinder,
    jackpot::JackpotShuffler,
    output::{print_combination, print_feedback, print_jackpot},
    wordlists::{
        WORDS_COMMON, WORDS_HASHTAG,
        loader::{dictionary_from_slice, load_dictionary},
    },
};
use rand::Rng;
use rand::rngs::StdRng;
use rand::{SeedableRng, rng};

#[derive(Parser)]
#[command(
    name = "puzzlegen",
    about = "Puzzle generator for a suite of 5-letter word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for reproducible puzzles (default: system entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Path to a custom word list (default: embedded lists)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a #-shaped four-word crossword
    Hashtag,

    /// Generate a column-scrambled word set
    Jackpot {
        /// Number of words (3 to 5)
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// Also print the target words
        #[arg(short, long)]
        reveal: bool,
    },

    /// Evaluate a guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.seed {
        Some(seed) => run(&cli, &mut StdRng::seed_from_u64(seed)),
        None => run(&cli, &mut rng()),
    }
}

fn run<R: Rng>(cli: &Cli, rng: &mut R) -> Result<()> {
    match &cli.command {
        Commands::Hashtag => {
            let dict = load_wordlist(cli.wordlist.as_deref(), WORDS_HASHTAG)?;
            let finder = HashtagFinder::new(&dict);
            let combination = finder.find(rng)?;
            print_combination(&combination);
            Ok(())
        }
        Commands::Jackpot { count, reveal } => {
            let dict = load_wordlist(cli.wordlist.as_deref(), WORDS_COMMON)?;
            let shuffler = JackpotShuffler::new(&dict);
            let puzzle = shuffler.generate(*count, rng)?;
            print_jackpot(&puzzle, *reveal);
            Ok(())
        }
        Commands::Evaluate { guess, target } => {
            let dict = load_wordlist(cli.wordlist.as_deref(), WORDS_COMMON)?;
            let guess = Word::new(guess.as_str())?;
            let target = Word::new(target.as_str())?;

            if !dict.contains(guess.text()) {
                println!("(note: '{guess}' is not in the word list)");
            }

            let feedback = Feedback::evaluate(&guess, &target);
            print_feedback(&guess, &feedback);
            Ok(())
        }
    }
}

/// Load the dictionary: custom file if `-w` was given, embedded list otherwise
fn load_wordlist(path: Option<&str>, embedded: &[&str]) -> Result<Dictionary> {
    match path {
        Some(path) => {
            load_dictionary(path).with_context(|| format!("Failed to load word list {path}"))
        }
        None => Ok(dictionary_from_slice(embedded)),
    }
}
