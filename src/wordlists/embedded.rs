//! Built-in word categories
//!
//! Default categories compiled into the binary so the game is playable with no
//! word files on disk. A `words/` directory, when present, extends and
//! overrides these.

/// Common animals.
pub const ANIMALS: &[&str] = &[
    "elephant",
    "giraffe",
    "penguin",
    "kangaroo",
    "dolphin",
    "octopus",
    "cheetah",
    "hedgehog",
    "flamingo",
    "armadillo",
    "platypus",
    "wolverine",
    "chameleon",
    "porcupine",
    "guinea pig",
];

/// Countries of the world.
pub const COUNTRIES: &[&str] = &[
    "portugal",
    "argentina",
    "morocco",
    "thailand",
    "iceland",
    "mongolia",
    "ecuador",
    "slovenia",
    "tanzania",
    "vietnam",
    "uruguay",
    "new zealand",
    "sri lanka",
    "madagascar",
];

/// Programming and software terms.
pub const PROGRAMMING: &[&str] = &[
    "compiler",
    "variable",
    "function",
    "iterator",
    "recursion",
    "debugger",
    "algorithm",
    "closure",
    "pointer",
    "mutex",
    "borrow",
    "lifetime",
    "template",
    "keyword",
];

/// Science vocabulary.
pub const SCIENCE: &[&str] = &[
    "gravity",
    "molecule",
    "neutron",
    "enzyme",
    "velocity",
    "chromosome",
    "isotope",
    "photosynthesis",
    "catalyst",
    "entropy",
    "black hole",
    "x-ray",
    "quasar",
    "mitosis",
];

/// Builtin categories in menu order.
pub const BUILTIN: &[(&str, &[&str])] = &[
    ("Animals", ANIMALS),
    ("Countries", COUNTRIES),
    ("Programming", PROGRAMMING),
    ("Science", SCIENCE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_category_constant() {
        assert_eq!(BUILTIN.len(), 4);
        for (label, words) in BUILTIN {
            assert!(!label.is_empty());
            assert!(!words.is_empty(), "category '{label}' has no words");
        }
    }

    #[test]
    fn builtin_words_are_playable() {
        // Every word must be lowercase and contain at least one letter
        for (label, words) in BUILTIN {
            for word in *words {
                assert!(
                    word.chars().any(char::is_alphabetic),
                    "word '{word}' in '{label}' has no letters"
                );
                assert_eq!(
                    *word,
                    word.to_lowercase(),
                    "word '{word}' in '{label}' is not lowercase"
                );
            }
        }
    }
}
