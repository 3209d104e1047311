//! Reading sources into the tally.
//!
//! Each source is read line by line and processed to completion before the
//! next one starts. A source that cannot be opened or read is recorded and
//! skipped; whatever was tallied before the failure is kept.

mod error;
mod source;

pub use error::SourceError;
pub use source::Source;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};
use triword_types::ReportConfig;

use crate::report::Report;
use crate::tally::WindowTally;

/// Outcome of [`Pipeline::run`].
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Sources read to the end.
    pub processed: usize,
    /// Sources that failed, in the order they were attempted.
    pub failed: Vec<SourceError>,
    /// Lines read during this run, including lines of failed sources.
    pub lines: u64,
    /// Set when the run only read standard input and it was empty.
    pub no_data: bool,
}

/// Single-owner pipeline: sources in, report out.
#[derive(Debug, Default)]
pub struct Pipeline {
    tally: WindowTally,
    config: ReportConfig,
}

impl Pipeline {
    /// Creates a pipeline that will report with `config`.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            tally: WindowTally::new(),
            config,
        }
    }

    /// Processes every source, taking standard input from the process.
    pub fn run(&mut self, sources: &[Source]) -> RunSummary {
        let stdin = io::stdin();
        self.run_with_stdin(sources, stdin.lock())
    }

    /// Processes every source, reading [`Source::Stdin`] from `stdin`.
    ///
    /// Standard input is consumed by its first occurrence; later
    /// occurrences read nothing.
    pub fn run_with_stdin<R: BufRead>(&mut self, sources: &[Source], stdin: R) -> RunSummary {
        let mut stdin = Some(stdin);
        let mut summary = RunSummary::default();
        let lines_before = self.tally.stats().lines;

        for source in sources {
            debug!(%source, "processing source");

            let result = match source {
                Source::File(path) => self.process_path(path),
                Source::Stdin => match stdin.take() {
                    Some(reader) => self
                        .process_reader(reader)
                        .map_err(|(_, err)| SourceError::from_io(Source::Stdin, err)),
                    None => Ok(0),
                },
            };

            match result {
                Ok(_) => summary.processed += 1,
                Err(err) => {
                    warn!(error = %err, "skipping source");
                    summary.failed.push(err);
                }
            }
        }

        summary.lines = self.tally.stats().lines - lines_before;
        summary.no_data = summary.lines == 0 && sources.iter().all(Source::is_stdin);

        info!(stats = %self.tally.stats(), failed = summary.failed.len(), "run complete");
        summary
    }

    /// Opens and processes one file.
    ///
    /// Returns the number of lines read.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn process_path(&mut self, path: &Path) -> Result<u64, SourceError> {
        let file = File::open(path)
            .map_err(|err| SourceError::from_io(Source::File(path.to_path_buf()), err))?;

        self.process_reader(BufReader::new(file))
            .map_err(|(_, err)| SourceError::from_io(Source::File(path.to_path_buf()), err))
    }

    /// Feeds a reader to the tally line by line as one source.
    ///
    /// On a read error, lines already read stay counted and the error is
    /// returned together with their number.
    pub fn process_reader<R: BufRead>(&mut self, mut reader: R) -> Result<u64, (u64, io::Error)> {
        let mut line = String::new();
        let mut lines = 0u64;

        let result = loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break Ok(lines),
                Ok(_) => {
                    self.tally.feed_line(&line);
                    lines += 1;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => break Err((lines, err)),
            }
        };

        self.tally.end_source();
        debug!(lines, "source finished");
        result
    }

    /// Ranks the current tally.
    pub fn report(&self) -> Report {
        Report::build(&self.tally, self.config)
    }

    /// The tally accumulated so far.
    #[inline]
    pub fn tally(&self) -> &WindowTally {
        &self.tally
    }

    /// Consumes the pipeline, returning its tally.
    pub fn into_tally(self) -> WindowTally {
        self.tally
    }
}
