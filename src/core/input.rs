//! Guess input classification
//!
//! Raw player input is classified before any game state changes. Classification
//! is a pure function of the trimmed input and the set of letters already
//! guessed; invalid input is reported and re-prompted without being recorded.

use rustc_hash::FxHashSet;
use std::fmt;

/// Sentinel that switches to a full-word guess.
pub const WORD_GUESS_SENTINEL: &str = "guess";

/// Sentinel that abandons the round.
pub const QUIT_SENTINEL: &str = "quit";

/// Classified player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// A fresh single-letter guess, normalized to lowercase
    Letter(char),
    /// Request to guess the full word
    WordGuess,
    /// Abandon the round
    Quit,
    /// Rejected input, with the reason shown to the player
    Invalid(InvalidInput),
}

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    Empty,
    TooLong,
    NonAlphabetic,
    AlreadyGuessed(char),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter something."),
            Self::TooLong => write!(
                f,
                "Please enter only a single letter (or '{WORD_GUESS_SENTINEL}' for the full word, '{QUIT_SENTINEL}' to exit)."
            ),
            Self::NonAlphabetic => write!(f, "Please enter only alphabetic characters."),
            Self::AlreadyGuessed(letter) => {
                write!(f, "You already guessed '{letter}'. Try a different letter.")
            }
        }
    }
}

/// Classify raw input against the letters guessed so far
///
/// Rules are checked in order and the first match wins:
/// 1. Empty input is invalid.
/// 2. The quit sentinel (case-insensitive) quits.
/// 3. The word-guess sentinel switches to a full-word guess.
/// 4. Anything longer than one character is too long.
/// 5. A non-alphabetic character is invalid.
/// 6. A letter already in `guessed` is invalid.
/// 7. Anything left is a fresh letter guess.
///
/// The ordering matters: a two-character input that is not a sentinel must be
/// rejected as too long, not as non-alphabetic, which is the clearer message.
///
/// Pure: no side effects, same inputs always classify the same way.
#[must_use]
pub fn classify(raw: &str, guessed: &FxHashSet<char>) -> PlayerInput {
    let input = raw.trim().to_lowercase();

    if input.is_empty() {
        return PlayerInput::Invalid(InvalidInput::Empty);
    }

    if input == QUIT_SENTINEL {
        return PlayerInput::Quit;
    }

    if input == WORD_GUESS_SENTINEL {
        return PlayerInput::WordGuess;
    }

    let mut chars = input.chars();
    let first = chars.next().expect("input is non-empty, checked above");
    if chars.next().is_some() {
        return PlayerInput::Invalid(InvalidInput::TooLong);
    }

    if !first.is_alphabetic() {
        return PlayerInput::Invalid(InvalidInput::NonAlphabetic);
    }

    if guessed.contains(&first) {
        return PlayerInput::Invalid(InvalidInput::AlreadyGuessed(first));
    }

    PlayerInput::Letter(first)
}
