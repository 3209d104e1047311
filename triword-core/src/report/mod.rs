//! Ranking and rendering of the most frequent windows.
//!
//! Entries are ordered by count (descending), then by window text
//! (ascending), so two runs over the same input print the same report.

use std::io;

use crate::tally::WindowTally;
use triword_types::{ReportConfig, WindowCount};

const HEADER_LEAD: &str = "============================";
const HEADER_TAIL: &str = "=======================";
const ARROW: &str = "          ------->                ";
const FOOTER: &str =
    "=================================== End ============================================";

/// Returns the `top_n` most frequent windows in report order.
///
/// Returns fewer entries when the tally holds fewer distinct windows.
pub fn rank(tally: &WindowTally, top_n: usize) -> Vec<WindowCount> {
    let mut entries: Vec<WindowCount> = tally
        .iter()
        .map(|(window, count)| WindowCount::new(window, count))
        .collect();

    if top_n < entries.len() {
        // Only the kept prefix needs a full sort.
        entries.select_nth_unstable(top_n);
        entries.truncate(top_n);
    }
    entries.sort_unstable();
    entries
}

/// A ranked, printable report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    config: ReportConfig,
    entries: Vec<WindowCount>,
}

impl Report {
    /// Ranks the tally according to `config`.
    pub fn build(tally: &WindowTally, config: ReportConfig) -> Self {
        Self {
            config,
            entries: rank(tally, config.top_n),
        }
    }

    /// The ranked entries, most frequent first.
    #[inline]
    pub fn entries(&self) -> &[WindowCount] {
        &self.entries
    }

    /// Number of entries that will be printed.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to print between the banners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configuration the report was built with.
    #[inline]
    pub fn config(&self) -> ReportConfig {
        self.config
    }

    /// Writes the header banner, one line per entry, and the footer.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{HEADER_LEAD} Top {}: most frequent words found {HEADER_TAIL}",
            self.config.top_n
        )?;

        let width = self.config.field_width;
        for entry in &self.entries {
            writeln!(out, "{:>width$}{ARROW}{}", entry.window, entry.count)?;
        }

        writeln!(out, "{FOOTER}")?;
        Ok(())
    }

    /// Renders into a String.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
