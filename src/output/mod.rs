//! Terminal output
//!
//! Display screens, prompting, and the gallows art.

pub mod art;
pub mod display;
