//! Command-line interface.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use triword_core::{Pipeline, Source, SourceError};
use triword_types::ReportConfig;

const NO_DATA: &str = "No data provided! Aborting.";
const NOT_FOUND: &str = "File not found! Please check the file path and try again.";

/// Report the most frequent three-word phrases in text
#[derive(Parser, Debug)]
#[command(name = "triword", version)]
pub struct Cli {
    /// Text files to analyze (UTF-8). Reads standard input when omitted.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Number of phrases to report
    #[arg(
        short = 'n',
        long,
        env = "TRIWORD_TOP",
        value_name = "N",
        default_value_t = ReportConfig::DEFAULT_TOP_N
    )]
    pub top: usize,

    /// Width of the right-aligned phrase column
    #[arg(long, value_name = "W", default_value_t = ReportConfig::DEFAULT_FIELD_WIDTH)]
    pub width: usize,

    /// Print tally statistics to stderr after the report
    #[arg(long)]
    pub stats: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Report settings taken from the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::top(self.top).with_field_width(self.width)
    }

    /// Files to read, or standard input when none were given.
    pub fn sources(&self) -> Vec<Source> {
        Source::from_paths(self.files.iter().cloned())
    }
}

/// Runs against the process's standard streams.
pub fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    execute(&cli, stdin.lock(), &mut out)?;
    out.flush().context("failed to flush stdout")
}

/// Processes every source, then prints failures and the report to `out`.
pub fn execute<R, W>(cli: &Cli, stdin: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = cli.report_config();
    let sources = cli.sources();
    debug!(sources = sources.len(), top_n = config.top_n, "starting run");

    let mut pipeline = Pipeline::new(config);
    let summary = pipeline.run_with_stdin(&sources, stdin);

    for err in &summary.failed {
        writeln!(out, "{}", user_message(err)).context("failed to write to stdout")?;
    }

    if summary.no_data {
        writeln!(out, "{NO_DATA}").context("failed to write to stdout")?;
        return Ok(());
    }

    pipeline
        .report()
        .render(out)
        .context("failed to write report")?;

    if cli.stats {
        eprintln!("{}", pipeline.tally().stats());
    }

    Ok(())
}

fn user_message(err: &SourceError) -> String {
    match err {
        SourceError::NotFound { path } => format!("{NOT_FOUND} ({})", path.display()),
        other => format!("Skipping unreadable input: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("triword").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn output(cli: &Cli, stdin: &str) -> String {
        let mut out = Vec::new();
        execute(cli, Cursor::new(stdin.to_owned()), &mut out).expect("run should succeed");
        String::from_utf8(out).expect("report should be UTF-8")
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.report_config(), ReportConfig::default());
        assert_eq!(cli.sources(), vec![Source::Stdin]);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.stats);
    }

    #[test]
    fn flags_map_to_config() {
        let cli = parse(&["-n", "5", "--width", "12", "a.txt", "b.txt"]);
        assert_eq!(cli.report_config(), ReportConfig::top(5).with_field_width(12));
        assert_eq!(
            cli.sources(),
            vec![Source::File("a.txt".into()), Source::File("b.txt".into())]
        );
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["triword", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_stdin_reports_no_data() {
        let out = output(&parse(&[]), "");
        assert_eq!(out, "No data provided! Aborting.\n");
    }

    #[test]
    fn stdin_report_is_short_when_few_windows() {
        let out = output(&parse(&[]), "I love\nsandwiches\n");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Top 100: most frequent words found"));
        assert!(lines[1].ends_with("i love sandwiches          ------->                1"));
        assert!(lines[2].contains(" End "));
    }

    #[test]
    fn missing_file_message_then_report() {
        let cli = parse(&["no/such/file.txt"]);
        let out = output(&cli, "ignored because files were given");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "File not found! Please check the file path and try again. (no/such/file.txt)"
        );
        assert!(lines[1].contains("most frequent words found"));
        assert!(lines[2].contains(" End "));
        assert_eq!(lines.len(), 3);
    }
}
