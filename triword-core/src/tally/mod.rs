//! Window frequency tally.
//!
//! Counts every three-token window of every source in a run.
//!
//! Memory Layout:
//! - Counts live in a single `FxHashMap<Box<str>, u64>`
//! - Between lines only the last two tokens of a source are kept (the
//!   carry), so per-source memory is bounded by the longest line
//! - Window keys are joined into a reused buffer and only allocated on
//!   first sight
//!
//! Threading:
//! - [`WindowTally`] is owned by a single pipeline and needs no locking.

mod api;
mod stats;
mod types;

pub use stats::TallyStats;
pub use types::{FrequencyMap, WindowTally};
