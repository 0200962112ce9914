//! Per-round audit records
//!
//! Every completed round is serialized into `<log_dir>/game<N>/log.txt`: the
//! full ordered guess history, the wrong-guess list, the outcome and points,
//! the statistics snapshot taken after the round was counted, and a replay of
//! the masked progress after each guess so the reveal trajectory can be
//! audited independently of the live display. Game numbers are sequential, so
//! a record never overwrites an earlier game's.

use crate::core::round::{GuessRecord, RoundResult};
use crate::core::secret::Secret;
use crate::stats::StatsRecord;
use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Writer for per-round audit records under a log directory
pub struct AuditLog {
    root: PathBuf,
}

impl AuditLog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a given game's record lives in
    #[must_use]
    pub fn game_dir(&self, game_num: u32) -> PathBuf {
        self.root.join(format!("game{game_num}"))
    }

    /// Write the audit record for game `game_num`, returning its path
    ///
    /// `stats` must be the snapshot taken after this round was counted; the
    /// logger never reloads statistics itself, so the logged totals are
    /// exactly the totals the session layer goes on to save.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the game directory or log file cannot be
    /// written.
    pub fn write_round(
        &self,
        game_num: u32,
        result: &RoundResult,
        stats: &StatsRecord,
    ) -> io::Result<PathBuf> {
        let dir = self.game_dir(game_num);
        fs::create_dir_all(&dir)?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let path = dir.join("log.txt");
        fs::write(&path, render_round_log(game_num, result, stats, &timestamp))?;
        Ok(path)
    }
}

/// Render a complete audit record
///
/// Pure formatting over already-computed state; no decisions are made here.
#[must_use]
pub fn render_round_log(
    game_num: u32,
    result: &RoundResult,
    stats: &StatsRecord,
    timestamp: &str,
) -> String {
    let mut out = String::new();
    let secret = &result.secret;

    let _ = writeln!(out, "Game {game_num} Log");
    let _ = writeln!(out, "Category: {}", secret.category());
    let _ = writeln!(out, "Word: {}", secret.word());
    let _ = writeln!(out, "Word Length: {}", secret.length());

    let _ = writeln!(out, "\nGuesses (in order):");
    for (i, record) in result.history.iter().enumerate() {
        let status = if record.correct { "Correct" } else { "Wrong" };
        let _ = writeln!(out, "{}. {} -> {}", i + 1, record.text, status);
    }

    let _ = writeln!(out, "\nWrong Guesses List: {}", result.wrong.join(", "));
    let _ = writeln!(out, "Wrong Guesses Count: {}", result.wrong.len());
    let _ = writeln!(out, "Remaining Attempts at End: {}", result.remaining_attempts());
    let _ = writeln!(out, "Result: {}", result.outcome.label());
    let _ = writeln!(out, "Points Earned: {}", result.points);
    let _ = writeln!(out, "Total Score (after this round): {}", stats.total_score);
    let _ = writeln!(out, "Games Played: {}", stats.games_played);
    let _ = writeln!(out, "Wins: {}", stats.wins);
    let _ = writeln!(out, "Losses: {}", stats.losses);
    let _ = writeln!(out, "Win Rate: {:.2}%", stats.win_rate());
    let _ = writeln!(out, "Date & Time: {timestamp}");
    let _ = writeln!(out, "{}", "-".repeat(50));

    let _ = writeln!(out, "\nSession Notes:");
    let _ = writeln!(
        out,
        "- Gallows reached stage {count} after {count} wrong guess(es).",
        count = result.wrong.len()
    );
    let _ = writeln!(out, "- Progress trace:");
    for line in progress_trace(secret, &result.history) {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "{}", "-".repeat(50));

    out
}

/// Rebuild the masked progress after each guess, mirroring the live display
///
/// A correct letter reveals its positions; a correct full-word guess reveals
/// everything at once; wrong guesses are annotated as producing no change.
fn progress_trace(secret: &Secret, history: &[GuessRecord]) -> Vec<String> {
    let mut guessed: FxHashSet<char> = FxHashSet::default();
    let mut lines = vec![spaced(&secret.progress(&guessed))];

    for record in history {
        if record.correct {
            guessed.extend(record.text.chars().filter(|c| c.is_alphabetic()));
        }
        let mut line = format!("-> {}", spaced(&secret.progress(&guessed)));
        if !record.correct {
            let _ = write!(line, " ({} wrong, no progress change)", record.text);
        }
        lines.push(line);
    }

    lines
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
