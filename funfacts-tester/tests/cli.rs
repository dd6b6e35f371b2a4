use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "funfacts-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_checks_writes_output() {
    let exe = env!("CARGO_BIN_EXE_funfacts-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-checks", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available checks"));
    assert!(content.contains("resolver"));
}

#[test]
fn cli_markdown_report_passes_on_bundled_data() {
    let exe = env!("CARGO_BIN_EXE_funfacts-tester");
    let output_path = temp_path("md");
    let status = Command::new(exe)
        .args(["--report", "markdown", "--samples", "500", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("# Fun Facts Check Results"));
    assert!(!content.contains("## Failures"));
}

#[test]
fn cli_exits_nonzero_when_a_check_fails() {
    let exe = env!("CARGO_BIN_EXE_funfacts-tester");
    let output = Command::new(exe)
        .args(["--checks", "coverage", "--samples", "1", "--report", "json"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"passed\": false"));
}

#[test]
fn cli_rejects_unknown_check() {
    let exe = env!("CARGO_BIN_EXE_funfacts-tester");
    let output = Command::new(exe)
        .args(["--checks", "bogus"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}
