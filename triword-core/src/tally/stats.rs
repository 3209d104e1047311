//! Statistics and TallyStats.

use crate::tally::types::WindowTally;

/// A snapshot of tally statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallyStats {
    /// Number of sources fully processed.
    pub sources: u64,
    /// Number of lines fed.
    pub lines: u64,
    /// Number of tokens seen.
    pub tokens: u64,
    /// Number of window occurrences counted.
    pub windows: u64,
    /// Number of distinct windows.
    pub distinct_windows: usize,
}

impl WindowTally {
    /// Returns tally statistics.
    pub fn stats(&self) -> TallyStats {
        TallyStats {
            sources: self.sources,
            lines: self.lines,
            tokens: self.tokens,
            windows: self.windows,
            distinct_windows: self.counts.len(),
        }
    }
}

impl TallyStats {
    /// Share of window occurrences that were repeats of an earlier window.
    pub fn repeat_ratio(&self) -> f64 {
        if self.windows == 0 {
            return 0.0;
        }
        1.0 - self.distinct_windows as f64 / self.windows as f64
    }
}

impl core::fmt::Display for TallyStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} sources, {} lines, {} tokens, {} windows ({} distinct)",
            self.sources, self.lines, self.tokens, self.windows, self.distinct_windows
        )?;

        if self.windows > 0 {
            write!(f, ", {:.1}% repeats", self.repeat_ratio() * 100.0)?;
        }

        Ok(())
    }
}
