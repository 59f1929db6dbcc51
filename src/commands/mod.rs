//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use hints::{HintsResult, find_words};
pub use simple::run_simple;
