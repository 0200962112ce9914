//! Cross-session statistics
//!
//! A small flat record persisted between sessions: games played, wins, losses,
//! total score. The record is owned by the session loop and mutated only
//! between rounds; the core only ever sees a snapshot for logging. Loading is
//! forgiving: a missing or malformed file resets to zeroed defaults.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Aggregate statistics across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsRecord {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u32,
}

impl StatsRecord {
    /// Count a won round and its points
    pub fn record_win(&mut self, points: u32) {
        self.games_played += 1;
        self.wins += 1;
        self.total_score += points;
    }

    /// Count a lost or abandoned round
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.losses += 1;
    }

    /// Percentage of games won, zero when no games have been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }

    /// Mean points per game, zero when no games have been played
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.total_score) / f64::from(self.games_played)
        }
    }
}

/// Flat-file persistence for a [`StatsRecord`]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the record, defaulting every field to zero when the file is
    /// missing or any value is malformed
    #[must_use]
    pub fn load(&self) -> StatsRecord {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| parse_stats(&content))
            .unwrap_or_default()
    }

    /// Persist the record, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn save(&self, record: &StatsRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_stats(record))
    }
}

/// Parse `key: value` lines; `None` on any malformed value
fn parse_stats(content: &str) -> Option<StatsRecord> {
    let mut record = StatsRecord::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':')?;
        let value: u32 = value.trim().parse().ok()?;

        match key.trim() {
            "games_played" => record.games_played = value,
            "wins" => record.wins = value,
            "losses" => record.losses = value,
            "total_score" => record.total_score = value,
            // Unknown keys are tolerated so the format can grow
            _ => {}
        }
    }

    Some(record)
}

fn render_stats(record: &StatsRecord) -> String {
    format!(
        "games_played: {}\nwins: {}\nlosses: {}\ntotal_score: {}\n",
        record.games_played, record.wins, record.losses, record.total_score
    )
}
