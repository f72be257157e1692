//! Utility functions for number and string formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{contains_ignore_case, format_number, format_rank, round_to, truncate};
