//! Hangman - CLI
//!
//! Category-based hangman in the terminal. The default mode is an interactive
//! numbered menu; `play` and `stats` subcommands skip straight to a round or
//! the statistics view.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    audit::AuditLog,
    commands::{PlayContext, play_round, run_stats},
    output::display,
    stats::StatsStore,
    wordlists::WordSource,
};
use std::path::PathBuf;

/// File inside the log directory holding the cross-session statistics.
const STATS_FILE: &str = "statistics.txt";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Category-based hangman with scoring, statistics, and per-game audit logs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory with word lists (words.txt plus categories/*.txt)
    #[arg(short = 'w', long, global = true, default_value = "words")]
    words_dir: PathBuf,

    /// Directory for statistics and per-game audit logs
    #[arg(short = 'l', long, global = true, default_value = "game_log")]
    log_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Play one round straight away, skipping the menu
    Play {
        /// Category to draw the word from (random when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show cross-session statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = WordSource::new(&cli.words_dir);
    let store = StatsStore::new(cli.log_dir.join(STATS_FILE));
    let audit = AuditLog::new(&cli.log_dir);
    let ctx = PlayContext {
        words: &words,
        store: &store,
        audit: &audit,
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&ctx),
        Commands::Play { category } => {
            let mut stats = ctx.store.load();
            play_round(&ctx, &mut stats, category.as_deref())
        }
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}

/// The interactive session loop: menu, category prompt, rounds
fn run_menu(ctx: &PlayContext<'_>) -> Result<()> {
    display::welcome();
    let mut stats = ctx.store.load();

    loop {
        match display::menu()?.as_str() {
            "1" => {
                let category = choose_category(ctx)?;
                play_round(ctx, &mut stats, category.as_deref())?;
            }
            "2" => display::statistics(&stats),
            "3" => {
                println!("\nThanks for playing Hangman!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Prompt for a category; unknown or blank input means a random word
fn choose_category(ctx: &PlayContext<'_>) -> Result<Option<String>> {
    let categories = ctx.words.categories();
    println!("\nAvailable categories: {}", categories.join(", "));

    let choice = display::prompt("Choose a category (or press Enter for random)")?;
    if choice.is_empty() {
        return Ok(None);
    }

    if categories.iter().any(|c| c.eq_ignore_ascii_case(&choice)) {
        Ok(Some(choice))
    } else {
        println!("Invalid category. Using random word.");
        Ok(None)
    }
}
