//! Word list loading utilities
//!
//! Reads newline-delimited word files and discovers per-category files under
//! the word directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory of the word directory holding one file per category.
pub const CATEGORY_SUBDIR: &str = "categories";

/// Unfiltered word pool file inside the word directory.
pub const MAIN_WORDS_FILE: &str = "words.txt";

/// Load words from a file, one per line
///
/// Lines are trimmed and empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}

/// Discover category files (`categories/*.txt`) under the word directory
///
/// Returns an empty list when the directory is missing; results are sorted by
/// path so category listings are stable.
#[must_use]
pub fn category_files(words_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(words_dir.join(CATEGORY_SUBDIR)) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    files
}

/// Category name for a discovered file: the capitalized file stem
#[must_use]
pub fn file_category_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    Some(capitalize(stem))
}

/// Capitalize the first character and lowercase the rest
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
