use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bench_command(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rcsv-bench"));
    cmd.current_dir(dir).env("RUST_LOG", "rcsv=info");
    cmd
}

/// Runs with whatever filter the binary picks when `RUST_LOG` is unset.
fn default_filter_command(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rcsv-bench"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_reports_elapsed_time() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("benchmark")).unwrap();
    fs::write(
        dir.path().join("benchmark").join("players_20.csv"),
        "name,age\nAlice,30\n",
    )
    .unwrap();

    let output = default_filter_command(dir.path())
        .output()
        .expect("Failed to run rcsv-bench");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Read players_20.csv took"),
        "Should log the timing line. log: {}",
        stderr
    );
}

#[test]
fn test_missing_input_exits_non_zero() {
    let dir = tempdir().unwrap();

    let output = bench_command(dir.path())
        .output()
        .expect("Failed to run rcsv-bench");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open"), "log: {}", stderr);
    assert!(!stderr.contains("took"), "log: {}", stderr);
}

#[test]
fn test_malformed_input_exits_non_zero() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("benchmark")).unwrap();
    fs::write(
        dir.path().join("benchmark").join("players_20.csv"),
        "a,b\n\"c,d\n",
    )
    .unwrap();

    let output = bench_command(dir.path())
        .output()
        .expect("Failed to run rcsv-bench");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse error"), "log: {}", stderr);
    assert!(!stderr.contains("took"), "log: {}", stderr);
}

#[test]
fn test_report_and_dialect_switches() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("benchmark")).unwrap();
    fs::write(
        dir.path().join("benchmark").join("players_20.csv"),
        "a;b\nc;d\ne;f\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("dialect.toml"),
        "comma = \";\"\nlazy_quotes = true\n",
    )
    .unwrap();

    let output = bench_command(dir.path())
        .args(["--dialect", "dialect.toml", "--engine", "all", "--report"])
        .output()
        .expect("Failed to run rcsv-bench");

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["engine"], "native");
    assert_eq!(reports[0]["records"], 3);
    assert_eq!(reports[1]["engine"], "csv_crate");
    assert_eq!(reports[1]["records"], 3);
}
