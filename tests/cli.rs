use std::process::{Command, Output};

fn exprtree(args: &[&str]) -> Output {
    let binary = env!("CARGO_BIN_EXE_exprtree");
    Command::new(binary).args(args)
                        .env_remove("RUST_LOG")
                        .output()
                        .unwrap_or_else(|e| panic!("Failed to run {binary}: {e}"))
}

#[test]
fn run_tests_flag_runs_self_test() {
    let output = exprtree(&["--run-tests"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "stderr: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.last(), Some(&"All tests passed successfully."));
    assert_eq!(lines.iter().filter(|line| line.ends_with("... Passed.")).count(), 12);
    assert!(!stdout.contains("Failed"));
    assert!(stderr.contains("Undefined variable 'y'."), "stderr: {stderr}");
}

#[test]
fn no_arguments_prints_usage() {
    let output = exprtree(&[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
    assert!(stdout.contains("--run-tests"), "stdout: {stdout}");
    assert!(!stdout.contains("Passed."));
}

#[test]
fn unknown_argument_is_rejected() {
    let output = exprtree(&["--frobnicate"]);
    assert!(!output.status.success());
}
