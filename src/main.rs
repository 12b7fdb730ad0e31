//! Wordle Game - CLI
//!
//! Five-letter word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{PlayConfig, run_play},
    core::{Word, evaluate},
    output::print_score_result,
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the target word list based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordle_game=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = PlayConfig::new(cli.answer, cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play_command(&words, config)
        }
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play(&config, &words)
        }
        Commands::Score { guess, target } => {
            let result = evaluate(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(words: &[Word], config: PlayConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config)?;
    run_tui(app)
}
