//! Statistics command

use crate::output::display;
use crate::stats::StatsStore;

/// Show the persisted cross-session statistics
pub fn run_stats(store: &StatsStore) {
    display::statistics(&store.load());
}
