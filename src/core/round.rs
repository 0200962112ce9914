//! Round state and turn progression
//!
//! A `Round` owns one play-through of a single secret: the guessed-letter set,
//! the ordered wrong-guess list, and the full guess history kept for audit
//! logging. Game-state decisions are derived from the guessed set and the
//! wrong list alone; the history is never consulted for them.

use super::input::{PlayerInput, classify};
use super::score::calculate_score;
use super::secret::Secret;
use rustc_hash::FxHashSet;

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG: usize = 6;

/// One processed guess, in chronological order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// The guessed text: a single letter or a full-word attempt
    pub text: String,
    /// Whether the guess was correct
    pub correct: bool,
}

/// Liveness of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// The player quit. Counts as a loss, but is logged distinctly so a
    /// voluntary abandonment can be told apart from running out of attempts.
    Abandoned,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Label used in audit records
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => "Win",
            Self::Lost => "Loss",
            Self::Abandoned => "Loss (Quit)",
        }
    }
}

/// Terminal value of a round, consumed by the session loop and the audit log
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    /// Points earned; zero for any loss, including abandonment
    pub points: u32,
    pub secret: Secret,
    /// Every processed guess in order
    pub history: Vec<GuessRecord>,
    /// Every incorrect guess in order
    pub wrong: Vec<String>,
}

impl RoundResult {
    /// Attempts that were still left when the round ended
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong.len())
    }
}

/// State machine for one round: `InProgress` until won or lost
///
/// # Examples
/// ```
/// use hangman::core::{Round, RoundStatus, Secret};
///
/// let mut round = Round::new(Secret::new("cat", "Animals").unwrap());
/// round.guess_letter('c');
/// round.guess_letter('a');
/// round.guess_letter('t');
/// assert_eq!(round.status(), RoundStatus::Won);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    secret: Secret,
    guessed: FxHashSet<char>,
    wrong: Vec<String>,
    history: Vec<GuessRecord>,
}

impl Round {
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            wrong: Vec::new(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub fn wrong(&self) -> &[String] {
        &self.wrong
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrong.len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Guessed letters in alphabetical order, for display
    #[must_use]
    pub fn guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Attempts left before the round is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong.len())
    }

    /// Current masked progress of the secret
    #[must_use]
    pub fn progress(&self) -> String {
        self.secret.progress(&self.guessed)
    }

    /// Current liveness; win is always evaluated before loss
    ///
    /// The ordering means a correct final guess that coincides with the last
    /// attempt still counts as a win.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.secret.is_revealed(&self.guessed) {
            RoundStatus::Won
        } else if self.wrong.len() >= MAX_WRONG {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Classify raw input against this round's guessed letters
    #[must_use]
    pub fn classify_input(&self, raw: &str) -> PlayerInput {
        classify(raw, &self.guessed)
    }

    /// Apply a single-letter guess; returns true when the letter is in the secret
    ///
    /// Callers must only pass letters produced by [`Round::classify_input`],
    /// which guarantees the letter is fresh, alphabetic, and lowercase.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        self.guessed.insert(letter);
        let correct = self.secret.contains_letter(letter);
        if !correct {
            self.wrong.push(letter.to_string());
        }
        self.history.push(GuessRecord {
            text: letter.to_string(),
            correct,
        });
        correct
    }

    /// Apply a full-word guess; returns true when it matches the secret
    ///
    /// A correct word reveals every letter at once. A wrong word costs exactly
    /// one attempt, the same as a wrong letter.
    pub fn guess_word(&mut self, attempt: &str) -> bool {
        let attempt = attempt.trim().to_lowercase();
        let correct = self.secret.matches(&attempt);
        if correct {
            let letters: Vec<char> = self.secret.letters().collect();
            self.guessed.extend(letters);
        } else {
            self.wrong.push(attempt.clone());
        }
        self.history.push(GuessRecord {
            text: attempt,
            correct,
        });
        correct
    }

    /// Consume the round into its terminal result
    ///
    /// Only a win scores; any loss, including abandonment, earns zero points.
    #[must_use]
    pub fn finish(self, outcome: RoundOutcome) -> RoundResult {
        let points = if outcome.is_win() {
            calculate_score(self.secret.length(), self.wrong.len())
        } else {
            0
        };
        RoundResult {
            outcome,
            points,
            secret: self.secret,
            history: self.history,
            wrong: self.wrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_for(word: &str) -> Round {
        Round::new(Secret::new(word, "Test").unwrap())
    }

    #[test]
    fn remaining_attempts_always_tracks_wrong_list() {
        let mut round = round_for("cat");
        assert_eq!(round.remaining_attempts(), MAX_WRONG);

        round.guess_letter('x');
        assert_eq!(round.remaining_attempts(), MAX_WRONG - round.wrong().len());
        assert_eq!(round.remaining_attempts(), 5);

        round.guess_letter('c');
        assert_eq!(round.remaining_attempts(), 5);

        round.guess_word("dog");
        assert_eq!(round.remaining_attempts(), MAX_WRONG - round.wrong().len());
        assert_eq!(round.remaining_attempts(), 4);
    }

    #[test]
    fn all_correct_letters_win_with_full_points() {
        let mut round = round_for("cat");
        for letter in ['c', 'a', 't'] {
            assert!(round.guess_letter(letter));
        }

        assert_eq!(round.status(), RoundStatus::Won);
        let result = round.finish(RoundOutcome::Won);
        assert_eq!(result.points, 30);
        assert!(result.wrong.is_empty());
        assert_eq!(result.remaining_attempts(), 6);
    }

    #[test]
    fn six_wrong_letters_lose_with_zero_points() {
        let mut round = round_for("cat");
        for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
            assert_eq!(round.status(), RoundStatus::InProgress);
            assert!(!round.guess_letter(letter));
        }

        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_attempts(), 0);
        let result = round.finish(RoundOutcome::Lost);
        assert_eq!(result.points, 0);
        assert_eq!(result.wrong.len(), 6);
    }

    #[test]
    fn immediate_quit_scores_zero_with_distinct_label() {
        let round = round_for("cat");
        let result = round.finish(RoundOutcome::Abandoned);

        assert_eq!(result.points, 0);
        assert!(!result.outcome.is_win());
        assert_eq!(result.outcome.label(), "Loss (Quit)");
        assert_ne!(result.outcome.label(), RoundOutcome::Lost.label());
    }

    #[test]
    fn correct_word_guess_reveals_everything_in_one_step() {
        let mut round = round_for("Cat");
        assert!(round.guess_word("CAT"));

        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.progress(), "cat");
        assert!(round.wrong().is_empty());
        assert_eq!(round.history().len(), 1);
        assert!(round.history()[0].correct);
    }

    #[test]
    fn wrong_word_guess_costs_exactly_one_attempt() {
        let mut round = round_for("cat");
        assert!(!round.guess_word("dog"));

        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.wrong(), ["dog".to_string()]);
        assert_eq!(round.remaining_attempts(), 5);
        assert!(!round.history()[0].correct);
    }

    #[test]
    fn win_is_checked_before_loss() {
        // Drive the wrong list to the cap, then reveal the word; the round
        // must read as won, not lost
        let mut round = round_for("cat");
        for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
            round.guess_letter(letter);
        }
        round.guess_word("cat");

        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn non_letter_characters_are_pre_revealed() {
        let mut round = round_for("guinea pig");
        assert_eq!(round.progress(), "______ ___");

        for letter in ['g', 'u', 'i', 'n', 'e', 'a', 'p'] {
            round.guess_letter(letter);
        }
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.progress(), "guinea pig");
    }

    #[test]
    fn history_records_every_processed_guess_in_order() {
        let mut round = round_for("cat");
        round.guess_letter('c');
        round.guess_letter('z');
        round.guess_word("cab");
        round.guess_letter('a');

        let texts: Vec<&str> = round.history().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, ["c", "z", "cab", "a"]);

        let correct: Vec<bool> = round.history().iter().map(|g| g.correct).collect();
        assert_eq!(correct, [true, false, false, true]);
    }

    #[test]
    fn scoring_counts_wrong_word_guesses_like_wrong_letters() {
        let mut round = round_for("cat");
        round.guess_word("cab");
        round.guess_word("cat");

        assert_eq!(round.status(), RoundStatus::Won);
        let result = round.finish(RoundOutcome::Won);
        // 3 letters * 10 - 1 wrong * 5
        assert_eq!(result.points, 25);
    }

    #[test]
    fn guessed_sorted_is_alphabetical() {
        let mut round = round_for("cat");
        round.guess_letter('t');
        round.guess_letter('a');
        round.guess_letter('z');

        assert_eq!(round.guessed_sorted(), ['a', 't', 'z']);
    }
}
