//! Core types shared by the triword crates.
//!
//! Kept dependency-free so that the analysis core and the command-line
//! front end agree on what a ranked window and a report configuration are.

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

/// Number of consecutive tokens that make up one window.
pub const WINDOW_SIZE: usize = 3;

/// Separator placed between tokens when a window is materialized as a key.
pub const WINDOW_SEPARATOR: char = ' ';

/// Occurrence count for a single window.
///
/// 64 bits is wide enough that no realistic input reaches the ceiling;
/// the tally saturates instead of wrapping if it ever does.
pub type Count = u64;

/// A window together with the number of times it was seen.
///
/// Ordering is report order: higher counts sort first, and equal counts
/// fall back to the window text in ascending byte order so that reports
/// are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowCount {
    /// Space-joined window, e.g. `"of the whale"`.
    pub window: String,
    /// Occurrences across every source of the run.
    pub count: Count,
}

impl WindowCount {
    /// Creates a new ranked entry.
    #[inline]
    pub fn new(window: impl Into<String>, count: Count) -> Self {
        Self {
            window: window.into(),
            count,
        }
    }
}

impl PartialOrd for WindowCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WindowCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: count, descending
        // Secondary: window text, ascending
        match other.count.cmp(&self.count) {
            Ordering::Equal => self.window.cmp(&other.window),
            ord => ord,
        }
    }
}

impl fmt::Display for WindowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.window, self.count)
    }
}

/// Report configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of windows to print.
    /// Default: 100
    pub top_n: usize,
    /// Width of the right-aligned window column.
    /// Default: 30
    pub field_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: Self::DEFAULT_TOP_N,
            field_width: Self::DEFAULT_FIELD_WIDTH,
        }
    }
}

impl ReportConfig {
    /// Default number of windows in a report.
    pub const DEFAULT_TOP_N: usize = 100;

    /// Default width of the window column.
    pub const DEFAULT_FIELD_WIDTH: usize = 30;

    /// Creates a configuration reporting the `top_n` most frequent windows.
    pub const fn top(top_n: usize) -> Self {
        Self {
            top_n,
            field_width: Self::DEFAULT_FIELD_WIDTH,
        }
    }

    /// Returns a copy with a different column width.
    pub const fn with_field_width(mut self, field_width: usize) -> Self {
        self.field_width = field_width;
        self
    }
}
