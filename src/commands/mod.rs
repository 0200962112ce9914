//! Command implementations

pub mod play;
pub mod stats;

pub use play::{PlayContext, play_round};
pub use stats::run_stats;
