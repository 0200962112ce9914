//! Play command
//!
//! The session-side driver for rounds: draw a word, run the blocking guess
//! loop, count the result into statistics, write the audit record, persist.

use crate::audit::AuditLog;
use crate::core::input::PlayerInput;
use crate::core::round::{Round, RoundOutcome, RoundResult, RoundStatus};
use crate::core::secret::Secret;
use crate::output::display;
use crate::stats::{StatsRecord, StatsStore};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;

/// Collaborators a round needs from the session layer
pub struct PlayContext<'a> {
    pub words: &'a WordSource,
    pub store: &'a StatsStore,
    pub audit: &'a AuditLog,
}

/// Draw a word and play one round, updating and persisting statistics
///
/// Failure to draw a playable word aborts this round attempt and returns
/// normally; the session keeps running.
///
/// # Errors
///
/// Returns an error only for I/O failures on the interactive prompt.
pub fn play_round(
    ctx: &PlayContext<'_>,
    stats: &mut StatsRecord,
    category: Option<&str>,
) -> Result<()> {
    let selection = match ctx.words.pick(category) {
        Ok(selection) => selection,
        Err(e) => {
            println!("{}", format!("Error loading word: {e}. Please try again.").red());
            return Ok(());
        }
    };

    let secret = match Secret::new(selection.word, selection.category) {
        Ok(secret) => secret,
        Err(e) => {
            println!("{}", format!("Error loading word: {e}. Please try again.").red());
            return Ok(());
        }
    };

    let result = run_round(secret)?;
    conclude_round(ctx, stats, &result);
    display::statistics(stats);
    Ok(())
}

/// The blocking guess loop for one secret
///
/// Renders state, re-prompts on invalid input without touching any state, and
/// runs until the round is won, lost, or abandoned.
fn run_round(secret: Secret) -> Result<RoundResult> {
    println!(
        "\nNew word selected from '{}' (length {})",
        secret.category(),
        secret.length()
    );

    let mut round = Round::new(secret);
    loop {
        display::game_state(&round);

        match round.status() {
            RoundStatus::Won => {
                let result = round.finish(RoundOutcome::Won);
                display::win(result.secret.word(), result.points);
                return Ok(result);
            }
            RoundStatus::Lost => {
                display::loss(round.secret().word());
                return Ok(round.finish(RoundOutcome::Lost));
            }
            RoundStatus::InProgress => {}
        }

        let raw = display::prompt("\nEnter a letter (or 'guess' for the full word, 'quit' to exit)")?;

        match round.classify_input(&raw) {
            PlayerInput::Invalid(reason) => println!("{reason}"),
            PlayerInput::Quit => {
                println!("\nGame aborted.");
                return Ok(round.finish(RoundOutcome::Abandoned));
            }
            PlayerInput::WordGuess => {
                let attempt = display::prompt("Enter your guess for the full word")?;
                if round.guess_word(&attempt) {
                    println!("{}", "Correct! You guessed the word!".green());
                } else {
                    let attempt = attempt.trim().to_lowercase();
                    println!("{}", format!("Wrong! '{attempt}' is not the word.").red());
                }
            }
            PlayerInput::Letter(letter) => {
                if round.guess_letter(letter) {
                    println!("{} '{letter}' is in the word.", "Correct!".green());
                } else {
                    println!("{} '{letter}' is not in the word.", "Wrong!".red());
                }
            }
        }
    }
}

/// Count a finished round into the statistics, write the audit record, and
/// persist the updated record
///
/// The round is counted first, so the audit log receives the same post-round
/// totals the store goes on to save. Audit and persistence failures are
/// reported without interrupting the session.
fn conclude_round(ctx: &PlayContext<'_>, stats: &mut StatsRecord, result: &RoundResult) {
    if result.outcome.is_win() {
        stats.record_win(result.points);
    } else {
        stats.record_loss();
    }

    let game_num = stats.games_played;
    if let Err(e) = ctx.audit.write_round(game_num, result, stats) {
        eprintln!("Warning: could not write game log: {e}");
    }
    if let Err(e) = ctx.store.save(stats) {
        eprintln!("Warning: could not save statistics: {e}");
    }
}
