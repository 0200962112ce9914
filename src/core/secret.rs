//! Secret word representation
//!
//! A Secret pairs the word being guessed with its category label. The word is
//! normalized to lowercase on construction so every comparison during the
//! round is case-insensitive.

use rustc_hash::FxHashSet;
use std::fmt;

/// Placeholder shown for letters that have not been guessed yet.
pub const MASK: char = '_';

/// The word to guess plus the category it was drawn from.
///
/// Immutable for the lifetime of a round. Non-letter characters (spaces,
/// hyphens) are legal; they are never masked and never need guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    word: String,
    category: String,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    Empty,
    NoLetters,
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NoLetters => write!(f, "Word must contain at least one letter"),
        }
    }
}

impl std::error::Error for SecretError {}

impl Secret {
    /// Create a new Secret from a word and its category label
    ///
    /// The word is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `SecretError` if the word is empty after trimming, or contains
    /// no alphabetic characters (such a word could never be won).
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Secret;
    ///
    /// let secret = Secret::new("  Cat ", "Animals").unwrap();
    /// assert_eq!(secret.word(), "cat");
    ///
    /// assert!(Secret::new("", "Animals").is_err());
    /// assert!(Secret::new("42", "Numbers").is_err());
    /// ```
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Result<Self, SecretError> {
        let word: String = word.into().trim().to_lowercase();

        if word.is_empty() {
            return Err(SecretError::Empty);
        }

        if !word.chars().any(char::is_alphabetic) {
            return Err(SecretError::NoLetters);
        }

        Ok(Self {
            word,
            category: category.into(),
        })
    }

    /// Get the normalized word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the category label
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Number of characters in the word, non-letters included
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.word.chars().count()
    }

    /// Check whether a letter occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        self.word.chars().any(|c| c == letter)
    }

    /// Iterate over the alphabetic characters of the word
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.word.chars().filter(|c| c.is_alphabetic())
    }

    /// Case-insensitive comparison against a full-word attempt
    #[must_use]
    pub fn matches(&self, attempt: &str) -> bool {
        self.word == attempt.trim().to_lowercase()
    }

    /// Masked display form of the word
    ///
    /// Letters are revealed iff they are in `guessed`; non-letter characters
    /// always display literally.
    #[must_use]
    pub fn progress(&self, guessed: &FxHashSet<char>) -> String {
        self.word
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || guessed.contains(&c) {
                    c
                } else {
                    MASK
                }
            })
            .collect()
    }

    /// True once every letter of the word is in `guessed`
    ///
    /// Non-letter characters never count toward the win check.
    #[must_use]
    pub fn is_revealed(&self, guessed: &FxHashSet<char>) -> bool {
        self.letters().all(|c| guessed.contains(&c))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
