//! Gallows ASCII art
//!
//! One drawing per wrong-guess count, from the empty frame to the complete
//! figure at six.

/// Gallows stages, indexed by wrong-guess count.
const STAGES: [&str; 7] = [
    // 0: empty frame
    r"
   +---+
   |   |
       |
       |
       |
       |
=========",
    // 1: head
    r"
   +---+
   |   |
   O   |
       |
       |
       |
=========",
    // 2: body
    r"
   +---+
   |   |
   O   |
   |   |
       |
       |
=========",
    // 3: left arm
    r"
   +---+
   |   |
   O   |
  /|   |
       |
       |
=========",
    // 4: right arm
    r"
   +---+
   |   |
   O   |
  /|\  |
       |
       |
=========",
    // 5: left leg
    r"
   +---+
   |   |
   O   |
  /|\  |
  /    |
       |
=========",
    // 6: right leg, game over
    r"
   +---+
   |   |
   O   |
  /|\  |
  / \  |
       |
=========",
];

/// Drawing for the given wrong-guess count, clamped to the final stage
#[must_use]
pub fn gallows(wrong_count: usize) -> &'static str {
    STAGES[wrong_count.min(STAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_progress_with_wrong_count() {
        assert!(!gallows(0).contains('O'));
        assert!(gallows(1).contains('O'));
        assert!(gallows(6).contains(r"/ \"));
    }

    #[test]
    fn out_of_range_count_clamps_to_final_stage() {
        assert_eq!(gallows(7), gallows(6));
        assert_eq!(gallows(100), gallows(6));
    }

    #[test]
    fn every_stage_is_distinct() {
        for window in STAGES.windows(2) {
            assert_ne!(window[0], window[1]);
        }
    }
}
