//! Word selection
//!
//! Draws a random word for a new round, preferring a requested category and
//! falling back to broader pools rather than failing: category file, builtin
//! category, main word file, any discovered category file, builtin pool. Only
//! a completely empty pool is an error.

pub mod embedded;
pub mod loader;

pub use embedded::BUILTIN;

use rand::prelude::IndexedRandom;
use std::fmt;
use std::path::PathBuf;

type BuiltinCategories = &'static [(&'static str, &'static [&'static str])];

/// A word drawn for a new round, with the category it actually came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub word: String,
    pub category: String,
}

/// Error type for word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordsError {
    /// Every pool, including the builtin one, was empty
    NoWordsAvailable,
}

impl fmt::Display for WordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable => write!(f, "No words available"),
        }
    }
}

impl std::error::Error for WordsError {}

/// Word supplier backed by a word directory plus the builtin categories
pub struct WordSource {
    root: PathBuf,
    builtin: BuiltinCategories,
}

impl WordSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            builtin: BUILTIN,
        }
    }

    #[cfg(test)]
    fn with_builtin(root: impl Into<PathBuf>, builtin: BuiltinCategories) -> Self {
        Self {
            root: root.into(),
            builtin,
        }
    }

    /// Available category names: builtins plus discovered files, deduplicated
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .builtin
            .iter()
            .map(|(label, _)| (*label).to_string())
            .collect();

        for file in loader::category_files(&self.root) {
            if let Some(name) = loader::file_category_name(&file) {
                if !categories.contains(&name) {
                    categories.push(name);
                }
            }
        }

        categories
    }

    /// Draw a random word, preferring the requested category
    ///
    /// An unknown or empty category silently falls back to the unfiltered
    /// pool; the returned label always reflects where the word actually came
    /// from.
    ///
    /// # Errors
    ///
    /// Returns [`WordsError::NoWordsAvailable`] only when every pool is empty.
    pub fn pick(&self, category: Option<&str>) -> Result<Selection, WordsError> {
        let mut rng = rand::rng();

        if let Some(name) = category {
            let file = self
                .root
                .join(loader::CATEGORY_SUBDIR)
                .join(format!("{}.txt", name.to_lowercase()));
            if let Ok(words) = loader::read_word_file(&file) {
                if let Some(word) = words.choose(&mut rng) {
                    return Ok(Selection {
                        word: word.clone(),
                        category: loader::capitalize(name),
                    });
                }
            }

            let builtin = self
                .builtin
                .iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(name));
            if let Some((label, pool)) = builtin {
                if let Some(word) = pool.choose(&mut rng) {
                    return Ok(Selection {
                        word: (*word).to_string(),
                        category: (*label).to_string(),
                    });
                }
            }
        }

        // Unfiltered: main pool file first
        if let Ok(words) = loader::read_word_file(self.root.join(loader::MAIN_WORDS_FILE)) {
            if let Some(word) = words.choose(&mut rng) {
                return Ok(Selection {
                    word: word.clone(),
                    category: "Random".to_string(),
                });
            }
        }

        // Then any discovered category file
        let files = loader::category_files(&self.root);
        if let Some(file) = files.choose(&mut rng) {
            if let Ok(words) = loader::read_word_file(file) {
                if let Some(word) = words.choose(&mut rng) {
                    let category = loader::file_category_name(file)
                        .unwrap_or_else(|| "Random".to_string());
                    return Ok(Selection {
                        word: word.clone(),
                        category,
                    });
                }
            }
        }

        // Last resort: the builtin pool
        if let Some((label, pool)) = self.builtin.choose(&mut rng) {
            if let Some(word) = pool.choose(&mut rng) {
                return Ok(Selection {
                    word: (*word).to_string(),
                    category: (*label).to_string(),
                });
            }
        }

        Err(WordsError::NoWordsAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TINY: BuiltinCategories = &[("Tiny", &["cat"])];

    #[test]
    fn builtin_categories_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::new(dir.path());

        let categories = source.categories();
        assert!(categories.contains(&"Animals".to_string()));
        assert!(categories.contains(&"Science".to_string()));
    }

    #[test]
    fn discovered_category_files_extend_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let categories_dir = dir.path().join(loader::CATEGORY_SUBDIR);
        fs::create_dir_all(&categories_dir).unwrap();
        fs::write(categories_dir.join("movies.txt"), "alien\n").unwrap();
        // A file matching a builtin name must not produce a duplicate entry
        fs::write(categories_dir.join("animals.txt"), "wombat\n").unwrap();

        let source = WordSource::new(dir.path());
        let categories = source.categories();

        assert!(categories.contains(&"Movies".to_string()));
        assert_eq!(
            categories.iter().filter(|c| *c == "Animals").count(),
            1
        );
    }

    #[test]
    fn pick_draws_from_requested_builtin_category() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::with_builtin(dir.path(), TINY);

        let selection = source.pick(Some("tiny")).unwrap();
        assert_eq!(selection.word, "cat");
        assert_eq!(selection.category, "Tiny");
    }

    #[test]
    fn category_file_takes_precedence_over_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let categories_dir = dir.path().join(loader::CATEGORY_SUBDIR);
        fs::create_dir_all(&categories_dir).unwrap();
        fs::write(categories_dir.join("tiny.txt"), "wombat\n").unwrap();

        let source = WordSource::with_builtin(dir.path(), TINY);
        let selection = source.pick(Some("Tiny")).unwrap();

        assert_eq!(selection.word, "wombat");
        assert_eq!(selection.category, "Tiny");
    }

    #[test]
    fn unknown_category_falls_back_to_unfiltered_pool() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(loader::MAIN_WORDS_FILE), "dog\n").unwrap();

        let source = WordSource::with_builtin(dir.path(), TINY);
        let selection = source.pick(Some("nope")).unwrap();

        assert_eq!(selection.word, "dog");
        assert_eq!(selection.category, "Random");
    }

    #[test]
    fn unfiltered_pick_uses_discovered_files_before_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let categories_dir = dir.path().join(loader::CATEGORY_SUBDIR);
        fs::create_dir_all(&categories_dir).unwrap();
        fs::write(categories_dir.join("movies.txt"), "alien\n").unwrap();

        let source = WordSource::with_builtin(dir.path(), TINY);
        let selection = source.pick(None).unwrap();

        assert_eq!(selection.word, "alien");
        assert_eq!(selection.category, "Movies");
    }

    #[test]
    fn builtin_pool_is_the_last_resort() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::with_builtin(dir.path(), TINY);

        let selection = source.pick(None).unwrap();
        assert_eq!(selection.word, "cat");
        assert_eq!(selection.category, "Tiny");
    }

    #[test]
    fn empty_source_reports_no_words() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::with_builtin(dir.path(), &[]);

        assert_eq!(source.pick(None), Err(WordsError::NoWordsAvailable));
        assert_eq!(
            source.pick(Some("anything")),
            Err(WordsError::NoWordsAvailable)
        );
    }
}
