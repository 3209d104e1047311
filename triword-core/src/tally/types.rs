//! Tally types and constants.

use crate::analyzer::LineAnalyzer;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use triword_types::{Count, WINDOW_SIZE};

/// Tokens kept between lines: a window can start this many tokens back.
pub const CARRY_LEN: usize = WINDOW_SIZE - 1;

/// Window key to occurrence count.
pub type FrequencyMap = FxHashMap<Box<str>, Count>;

/// Sliding-window frequency counter.
///
/// Owns the frequency map for a whole run. Within one source the token
/// stream is continuous across lines; [`WindowTally::end_source`] cuts it
/// so no window spans two sources.
#[derive(Debug)]
pub struct WindowTally {
    pub(crate) counts: FrequencyMap,
    /// Trailing tokens of the current source that may still lead a window
    pub(crate) carry: SmallVec<[String; CARRY_LEN]>,
    /// Reusable buffer holding carry + the tokens of the line being folded
    pub(crate) pending: Vec<String>,
    /// Reusable buffer for window keys (avoids allocation on repeat windows)
    pub(crate) key_buf: String,
    pub(crate) analyzer: LineAnalyzer,
    pub(crate) sources: u64,
    pub(crate) lines: u64,
    pub(crate) tokens: u64,
    pub(crate) windows: u64,
}

impl Default for WindowTally {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowTally {
    /// Creates a new, empty tally.
    pub fn new() -> Self {
        Self {
            counts: FrequencyMap::default(),
            carry: SmallVec::new(),
            pending: Vec::with_capacity(64),
            key_buf: String::with_capacity(64),
            analyzer: LineAnalyzer::new(),
            sources: 0,
            lines: 0,
            tokens: 0,
            windows: 0,
        }
    }

    /// Returns the number of distinct windows.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no window has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the count for `window`, 0 if it was never seen.
    #[inline]
    pub fn count(&self, window: &str) -> Count {
        self.counts.get(window).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> Count {
        self.counts
            .values()
            .fold(0, |acc: Count, &c| acc.saturating_add(c))
    }

    /// Iterates `(window, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> + '_ {
        self.counts.iter().map(|(k, &v)| (&**k, v))
    }

    /// Read access to the underlying map.
    #[inline]
    pub fn counts(&self) -> &FrequencyMap {
        &self.counts
    }

    /// Clears all counts, carry, and statistics.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.carry.clear();
        self.pending.clear();
        self.sources = 0;
        self.lines = 0;
        self.tokens = 0;
        self.windows = 0;
    }
}
