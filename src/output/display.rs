//! Terminal rendering and prompting
//!
//! Every user-facing screen lives here. The game core hands over already
//! computed values; nothing in this module makes game-state decisions.

use super::art;
use crate::core::round::{MAX_WRONG, Round};
use crate::stats::StatsRecord;
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print a prompt and read one trimmed line from stdin
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be flushed or stdin cannot be read.
pub fn prompt(text: &str) -> io::Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Welcome banner shown once per session
pub fn welcome() {
    println!("{}", rule().bright_cyan());
    println!("{}", "        WELCOME TO HANGMAN!".bright_yellow().bold());
    println!("{}", rule().bright_cyan());
    println!("Guess the word one letter at a time.");
    println!("You have {MAX_WRONG} wrong guesses before you lose!");
    println!("{}", rule().bright_cyan());
}

/// Main menu; returns the player's raw choice
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be read.
pub fn menu() -> io::Result<String> {
    println!("\n{}", rule());
    println!("{}", "MAIN MENU".bold());
    println!("{}", rule());
    println!("1. Play Game");
    println!("2. View Statistics");
    println!("3. Quit");
    println!("{}", rule());
    prompt("Enter your choice (1-3)")
}

/// Current round state: mask, guessed letters, attempts, gallows
pub fn game_state(round: &Round) {
    println!("\n{}", rule().bright_black());
    println!("{}", spaced(&round.progress()).bold());

    let guessed = round.guessed_sorted();
    let guessed_line = if guessed.is_empty() {
        "None".to_string()
    } else {
        guessed
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Guessed letters: {guessed_line}");

    let remaining = round.remaining_attempts();
    let remaining_colored = match remaining {
        0..=2 => remaining.to_string().red().bold(),
        3..=4 => remaining.to_string().yellow(),
        _ => remaining.to_string().green(),
    };
    println!("Remaining attempts: {remaining_colored}");
    println!("{}", art::gallows(round.wrong_count()));
    println!("{}", rule().bright_black());
}

/// Win banner with the revealed word and points earned
pub fn win(word: &str, points: u32) {
    println!("\n{}", rule().bright_green());
    println!("{}", "*** CONGRATULATIONS! YOU WIN! ***".bright_green().bold());
    println!("{}", rule().bright_green());
    println!("Word: {}", word.bright_white().bold());
    println!("Points earned this round: {}", points.to_string().bright_yellow());
    println!("{}", rule().bright_green());
}

/// Loss banner revealing the word
pub fn loss(word: &str) {
    println!("\n{}", rule().bright_red());
    println!("{}", "*** GAME OVER - YOU LOST! ***".bright_red().bold());
    println!("{}", rule().bright_red());
    println!("The word was: {}", word.bright_white().bold());
    println!("Better luck next time!");
    println!("{}", rule().bright_red());
}

/// Statistics block with derived win rate and average score
pub fn statistics(stats: &StatsRecord) {
    println!("\n{}", rule().bright_cyan());
    println!("{}", "GAME STATISTICS".bright_cyan().bold());
    println!("{}", rule().bright_cyan());
    println!("Games Played: {}", stats.games_played);
    println!("Wins: {}", stats.wins.to_string().green());
    println!("Losses: {}", stats.losses.to_string().red());
    println!("Win Rate: {:.2}%", stats.win_rate());
    println!("Total Score: {}", stats.total_score.to_string().bright_yellow());
    println!("Average Score per Game: {:.2}", stats.average_score());
    println!("{}", rule().bright_cyan());
}

/// Space out a mask string for readability: `c_t` becomes `c _ t`
fn spaced(progress: &str) -> String {
    let mut out = String::with_capacity(progress.len() * 2);
    for (i, c) in progress.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
