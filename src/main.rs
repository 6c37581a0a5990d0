//! Terminal Wordle - CLI
//!
//! `play` (the default) runs the TUI game; `stats` prints the persisted
//! statistics and exits.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_tui::{
    game::Session,
    interactive::{App, run_tui},
    output::print_stats,
    stats::{JsonFileStore, StatsStore, StatsTracker},
    wordlists::WordPool,
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle: six guesses, five letters, colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer pool file, one 5-letter word per line
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Allowed-guess file; always unioned with the answer pool
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Where the statistics snapshot is kept
    #[arg(long, global = true, default_value = "wordle_stats.json")]
    stats_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Print the persisted statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Stats) => {
            run_stats_command(&cli);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let pool = WordPool::load(&cli.answers, &cli.allowed);
    let tracker = StatsTracker::new(Box::new(JsonFileStore::new(&cli.stats_file)));

    let app = App::new(Session::new(pool, tracker));
    run_tui(app)
}

fn run_stats_command(cli: &Cli) {
    let stats = JsonFileStore::new(&cli.stats_file).load().unwrap_or_default();
    print_stats(&stats);
}
