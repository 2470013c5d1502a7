//! End-to-end: run the binary against a temporary output directory.

use std::process::Command;

fn calpart() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calpart"))
}

#[test]
fn analyze_with_defaults_writes_five_blocks() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("output-calendar-partition.txt");

    let status = calpart()
        .args(["analyze", "--output"])
        .arg(&out)
        .status()
        .expect("run calpart");
    assert!(status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    let headers: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("DAY INCREMENT"))
        .collect();
    assert_eq!(
        headers,
        vec![
            "DAY INCREMENT 6",
            "DAY INCREMENT 7",
            "DAY INCREMENT 8",
            "DAY INCREMENT 9",
            "DAY INCREMENT 10",
        ]
    );
    assert!(text.contains("Average partitions in pull: 6.083333333333333\n"));
}

#[test]
fn detailed_json_report() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("report.json");

    let status = calpart()
        .args([
            "analyze",
            "--increments",
            "7",
            "--years",
            "1",
            "--detailed",
            "--format",
            "json",
            "--output",
        ])
        .arg(&out)
        .status()
        .expect("run calpart");
    assert!(status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"status\": \"analyzed\""));
    assert!(text.contains("\"front_partition_point\": \"2016-01-25\""));
}

#[test]
fn invalid_start_date_exits_with_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("never.txt");

    let output = calpart()
        .args(["analyze", "--start-date", "2016-13-01", "--output"])
        .arg(&out)
        .output()
        .expect("run calpart");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid start_date"));
    assert!(!out.exists());
}
