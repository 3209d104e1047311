use std::fs;
use std::io::{Cursor, Write};

use tempfile::{tempdir, NamedTempFile};
use triword_core::{Pipeline, Source};
use triword_types::{ReportConfig, WindowCount};

const LOOMINGS: &str = "Call me Ishmael. Some years ago--never mind how long precisely--having
little or no money in my purse, and nothing particular to interest me on
shore, I thought I would sail about a little and see the watery part of
the world. It is a way I have of driving off the spleen and regulating the
circulation.
";

fn write_temp(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("should create temp file");
    file.write_all(contents).expect("should write temp file");
    file.flush().expect("should flush temp file");
    file
}

fn run(sources: &[Source], stdin: &str, config: ReportConfig) -> (Pipeline, triword_core::RunSummary) {
    let mut pipeline = Pipeline::new(config);
    let summary = pipeline.run_with_stdin(sources, Cursor::new(stdin.to_owned()));
    (pipeline, summary)
}

#[test]
fn file_and_stdin_give_the_same_tally() {
    let file = write_temp(LOOMINGS.as_bytes());

    let (from_file, _) = run(
        &[Source::File(file.path().to_path_buf())],
        "",
        ReportConfig::default(),
    );
    let (from_stdin, _) = run(&[Source::Stdin], LOOMINGS, ReportConfig::default());

    assert_eq!(from_file.tally().counts(), from_stdin.tally().counts());
    assert_eq!(from_file.tally().count("money in my"), 1);
    assert_eq!(from_file.tally().count("agonever mind how"), 1);
}

#[test]
fn window_occurrences_equal_tokens_minus_two() {
    let file = write_temp(LOOMINGS.as_bytes());
    let (pipeline, _) = run(
        &[Source::File(file.path().to_path_buf())],
        "",
        ReportConfig::default(),
    );

    let stats = pipeline.tally().stats();
    assert_eq!(stats.windows, stats.tokens - 2);
    assert_eq!(pipeline.tally().total(), stats.windows);
}

#[test]
fn counts_accumulate_across_files_but_windows_do_not_span_them() {
    let first = write_temp(b"the white whale\nthe white");
    let second = write_temp(b"whale the white whale\n");

    let (pipeline, summary) = run(
        &[
            Source::File(first.path().to_path_buf()),
            Source::File(second.path().to_path_buf()),
        ],
        "",
        ReportConfig::default(),
    );

    assert_eq!(summary.processed, 2);
    let tally = pipeline.tally();
    // once per file; "the white" ending the first file never meets "whale"
    assert_eq!(tally.count("the white whale"), 2);
    assert_eq!(tally.count("white whale the"), 1);
    assert_eq!(tally.count("whale the white"), 2);
    assert_eq!(tally.total(), (5 - 2) + (4 - 2));
}

#[test]
fn missing_file_does_not_stop_the_run() {
    let dir = tempdir().expect("should create temp dir");
    let missing = dir.path().join("moby_dick.txt");
    let present = write_temp(b"there she blows there she blows\n");

    let (pipeline, summary) = run(
        &[
            Source::File(missing.clone()),
            Source::File(present.path().to_path_buf()),
        ],
        "",
        ReportConfig::default(),
    );

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].is_not_found());
    assert_eq!(summary.failed[0].path(), Some(missing.as_path()));
    assert_eq!(pipeline.tally().count("there she blows"), 2);
}

#[test]
fn directory_is_a_read_failure() {
    let dir = tempdir().expect("should create temp dir");

    let (_, summary) = run(
        &[Source::File(dir.path().to_path_buf())],
        "",
        ReportConfig::default(),
    );

    assert_eq!(summary.failed.len(), 1);
    assert!(!summary.failed[0].is_not_found());
}

#[test]
fn invalid_utf8_file_keeps_valid_prefix() {
    let mut bytes = b"call me ishmael\nsome years ago\n".to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28, b'\n']);
    bytes.extend_from_slice(b"never counted here\n");
    let file = write_temp(&bytes);

    let (pipeline, summary) = run(
        &[Source::File(file.path().to_path_buf())],
        "",
        ReportConfig::default(),
    );

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.lines, 2);
    assert_eq!(pipeline.tally().count("ishmael some years"), 1);
    assert_eq!(pipeline.tally().count("never counted here"), 0);
}

#[test]
fn short_report_prints_available_windows_in_order() {
    let (pipeline, _) = run(
        &[Source::Stdin],
        "ay ay sir\nay ay sir\nthere she blows\n",
        ReportConfig::top(100),
    );

    let report = pipeline.report();
    assert_eq!(report.len(), pipeline.tally().distinct());
    assert_eq!(report.entries()[0], WindowCount::new("ay ay sir", 2));

    let text = report.to_text();
    assert_eq!(text.lines().count(), report.len() + 2);
}

#[test]
fn report_is_identical_across_runs() {
    let file = write_temp(LOOMINGS.as_bytes());
    let sources = [Source::File(file.path().to_path_buf())];

    let (a, _) = run(&sources, "", ReportConfig::top(10));
    let (b, _) = run(&sources, "", ReportConfig::top(10));

    assert_eq!(a.report(), b.report());
    assert_eq!(a.report().to_text(), b.report().to_text());
}

#[test]
fn process_path_reads_a_file() {
    let dir = tempdir().expect("should create temp dir");
    let path = dir.path().join("input.txt");
    fs::write(&path, "I love sandwiches").expect("should write input");

    let mut pipeline = Pipeline::new(ReportConfig::default());
    let lines = pipeline.process_path(&path).expect("file should be readable");

    assert_eq!(lines, 1);
    assert_eq!(pipeline.tally().count("i love sandwiches"), 1);
}
