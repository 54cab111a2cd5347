use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const RECORDS: &str = r#"{"ResourceRecordSets":[{"Name":"example.com.","Type":"A","TTL":300,"ResourceRecords":[{"Value":"1.2.3.4"}]}]}"#;

fn run_cli(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zone2tf"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut input) = child.stdin.take() {
        // The process may exit before reading stdin on usage errors.
        let _ = input.write_all(stdin.as_bytes());
    }
    Ok(child.wait_with_output()?)
}

#[test]
fn test_zone_relative_from_stdin() -> Result<()> {
    let output = run_cli(&["example.com"], RECORDS)?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("locals {\n  zoneID = \"example.com\"\n}\n\n"));
    assert!(stdout.contains("resource \"aws_route53_record\" \"record-example-com-a\" {\n"));
    assert!(stdout.contains("  zone_id = local.zoneID\n"));
    Ok(())
}

#[test]
fn test_standalone_from_stdin() -> Result<()> {
    let output = run_cli(&["Z123", "example.com"], RECORDS)?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.ends_with(
        "terraform import aws_route53_zone.example-com Z123\n\
         terraform import aws_route53_record.record-example-com-a Z123_example.com_A\n"
    ));
    Ok(())
}

#[test]
fn test_wrong_argument_count_prints_usage() -> Result<()> {
    let cases: [&[&str]; 2] = [&[], &["a", "b", "c"]];
    for args in cases {
        let output = run_cli(args, RECORDS)?;
        assert_eq!(output.status.code(), Some(1));

        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.starts_with("Usage: zone2tf"), "stdout: {}", stdout);
        assert!(!stdout.contains("resource"));
    }
    Ok(())
}

#[test]
fn test_malformed_json_fails_without_output() -> Result<()> {
    let output = run_cli(&["example.com"], "{not json")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse JSON"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_file_input_and_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("records.json");
    let output_path = temp_dir.path().join("main.tf");
    std::fs::write(&input_path, RECORDS)?;

    let output = run_cli(
        &[
            "--no-imports",
            "--input",
            input_path.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
            "Z123",
            "example.com",
        ],
        "",
    )?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.starts_with("resource \"aws_route53_zone\" \"example-com\" {"));
    assert!(!written.contains("terraform import"));
    Ok(())
}

#[test]
fn test_failed_run_leaves_existing_output_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("main.tf");
    std::fs::write(&output_path, "# keep me\n")?;

    let output = run_cli(
        &["--output", output_path.to_str().unwrap(), "example.com"],
        "[1, 2",
    )?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&output_path)?, "# keep me\n");
    Ok(())
}
