//! Three-word phrase frequency analysis.
//!
//! Text flows through a single linear pipeline:
//!
//! ```text
//! source lines ─▶ TextNormalizer ─▶ Tokenizer ─▶ WindowTally ─▶ Report
//! ```
//!
//! ```
//! use std::io::Cursor;
//! use triword_core::{Pipeline, Source};
//! use triword_types::ReportConfig;
//!
//! let mut pipeline = Pipeline::new(ReportConfig::top(10));
//! let text = "There she blows! There she blows, sir!";
//! pipeline.run_with_stdin(&[Source::Stdin], Cursor::new(text));
//!
//! let report = pipeline.report();
//! assert_eq!(report.entries()[0].window, "there she blows");
//! assert_eq!(report.entries()[0].count, 2);
//! ```

pub mod analyzer;
pub mod pipeline;
pub mod report;
pub mod tally;

pub use pipeline::{Pipeline, RunSummary, Source, SourceError};
pub use report::Report;
pub use tally::{FrequencyMap, TallyStats, WindowTally};
