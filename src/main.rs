mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use correcthorse::{Generator, SeededRandom, WordPool};

#[derive(Parser)]
#[command(
    name = "correcthorse",
    version,
    about = "Memorable multi-word passphrase generator"
)]
struct Cli {
    /// Number of words in the passphrase.
    #[arg(short = 'n', long = "words", default_value_t = 4)]
    words: usize,

    /// Path to a newline-separated word list.
    #[arg(short = 'w', long = "wordlist", value_name = "PATH")]
    wordlist: PathBuf,

    /// Shortest word length to accept.
    #[arg(long, default_value_t = 3)]
    min_length: usize,

    /// Longest word length to accept.
    #[arg(long, default_value_t = 9)]
    max_length: usize,

    /// Seed the generator for reproducible output (testing only).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the bare passphrase with no summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.max_length < cli.min_length {
        anyhow::bail!("--max-length must be at least --min-length");
    }

    let pool = WordPool::from_path(&cli.wordlist, cli.min_length, cli.max_length)
        .with_context(|| format!("unusable word list {}", cli.wordlist.display()))?;

    let (phrase, pool_size) = match cli.seed {
        Some(seed) => {
            let mut generator = Generator::new(pool, SeededRandom::new(seed));
            (generator.generate(cli.words), generator.pool().len())
        }
        None => {
            let mut generator = Generator::with_default_random(pool);
            (generator.generate(cli.words), generator.pool().len())
        }
    };

    let info = ui::PhraseInfo {
        wordlist: cli.wordlist,
        pool_size,
        min_length: cli.min_length,
        max_length: cli.max_length,
        word_count: cli.words,
        seed: cli.seed,
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    ui::display_phrase(&phrase, &info, &options);

    Ok(())
}
