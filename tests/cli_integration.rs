// CLI integration tests
// WHY: the binary is the outer surface users touch; JSON lines and exit codes must stay stable

#[path = "integration/mod.rs"]
mod test_utils;

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;
use test_utils::fixture_path;

fn langscore() -> Command {
    Command::new(env!("CARGO_BIN_EXE_langscore"))
}

fn report_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line should be JSON"))
        .collect()
}

#[test]
fn test_cli_reports_each_input_in_order() {
    let output = langscore()
        .arg(fixture_path("en_library.txt"))
        .arg(fixture_path("ru_library.txt"))
        .arg(fixture_path("da_news.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(output.status.success(), "langscore failed: {}", String::from_utf8_lossy(&output.stderr));

    let lines = report_lines(&output.stdout);
    assert_eq!(lines.len(), 3);
    let codes: Vec<&str> = lines.iter().map(|l| l["candidates"][0]["code"].as_str().unwrap()).collect();
    assert_eq!(codes, ["en", "ru", "da"]);
    assert_eq!(lines[0]["best"], "English");
    assert_eq!(lines[2]["code"], 1);
    assert!(lines.iter().all(|l| l["reliable"] == true));
    assert!(lines.iter().all(|l| l["candidates"].as_array().unwrap().len() == 3));
    assert!(lines[0]["input"].as_str().unwrap().ends_with("en_library.txt"));
}

#[test]
fn test_cli_best_reads_stdin() {
    let mut child = langscore()
        .arg("--best")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn langscore");
    child
        .stdin
        .take()
        .unwrap()
        .write_all("Der schnelle braune Fuchs über den faulen Hund sprang".as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "German");
}

#[test]
fn test_cli_missing_file_is_reported_not_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.txt");

    let output = langscore()
        .arg(&missing)
        .arg(fixture_path("fr_library.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(output.status.success());

    let lines = report_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines[0]["error"].is_string());
    assert_eq!(lines[0]["best"], "Unknown");
    assert_eq!(lines[0]["reliable"], false);
    assert_eq!(lines[1]["best"], "French");
    assert!(lines[1].get("error").is_none());
}

#[test]
fn test_cli_fail_fast_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = langscore()
        .arg("--fail-fast")
        .arg(temp_dir.path().join("missing.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(!output.status.success());
}

#[test]
fn test_cli_max_bytes_truncates() {
    let output = langscore()
        .args(["--max-bytes", "12", "--use-mmap"])
        .arg(fixture_path("en_library.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(output.status.success());

    let lines = report_lines(&output.stdout);
    assert_eq!(lines[0]["truncated"], true);
    assert_eq!(lines[0]["reliable"], false);
    assert!(lines[0]["text_bytes"].as_u64().unwrap() <= 12);
}

#[test]
fn test_cli_export_then_load_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = temp_dir.path().join("table.json");

    let export = langscore()
        .arg("--export-table")
        .arg(&snapshot)
        .output()
        .expect("Failed to run langscore");
    assert!(export.status.success(), "export failed: {}", String::from_utf8_lossy(&export.stderr));
    assert!(snapshot.exists());

    let output = langscore()
        .arg("--table")
        .arg(&snapshot)
        .arg("--best")
        .arg(fixture_path("es_library.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Spanish");
}

#[test]
fn test_cli_rejects_zero_chunk() {
    let output = langscore()
        .args(["--chunk-chars", "0"])
        .arg(fixture_path("en_library.txt"))
        .output()
        .expect("Failed to run langscore");
    assert!(!output.status.success());
}
