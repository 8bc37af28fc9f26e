// e2e/cli_integration.rs — black-box tests of the `argclass` binary
//
// Runs the binary with std::process::Command and checks stdout, stderr and
// the exit status for the harness behaviours: empty input, output formats,
// strict mode and the display-level trace.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `argclass` binary produced by Cargo.
fn argclass_bin() -> PathBuf {
    // CARGO_BIN_EXE_argclass is set by Cargo when running integration tests.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_argclass") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("argclass");
    p
}

/// Run the binary with a clean `ARGCLASS_*` environment plus `env`.
fn run_with(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(argclass_bin());
    cmd.args(args)
        .env_remove("ARGCLASS_FORMAT")
        .env_remove("ARGCLASS_STRICT")
        .env_remove("ARGCLASS_DISPLAY_LEVEL");
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("failed to run argclass")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── 1. Empty input ───────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_prints_usage_and_fails() {
    let out = run_with(&[], &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr_of(&out);
    assert!(err.contains("Usage"), "stderr: {}", err);
    assert!(err.contains("no commands or options given"), "stderr: {}", err);
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_no_arguments_silent_at_level_zero() {
    let out = run_with(&[], &[("ARGCLASS_DISPLAY_LEVEL", "0")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty(), "stderr: {}", stderr_of(&out));
}

// ── 2. Text output ───────────────────────────────────────────────────────────

#[test]
fn test_cli_text_output_is_framed_by_blank_lines() {
    let out = run_with(&["build", "-x", "alpha"], &[]);
    assert!(out.status.success());
    let text = stdout_of(&out);
    assert!(text.starts_with("\nArray\n(\n"), "stdout: {:?}", text);
    assert!(text.ends_with(")\n\n\n"), "stdout: {:?}", text);
    assert!(text.contains("            [0] => build\n"));
    assert!(text.contains("            [-x] => alpha\n"));
}

#[test]
fn test_cli_errors_do_not_fail_by_default() {
    let out = run_with(&["-1", "--a"], &[]);
    assert!(out.status.success());
    let text = stdout_of(&out);
    assert!(text.contains("            [0] => -1\n"));
    assert!(text.contains("            [1] => --a\n"));
}

// ── 3. JSON output ───────────────────────────────────────────────────────────

#[test]
fn test_cli_json_via_env() {
    let out = run_with(
        &["--option", "alpha", "-X", "-y", "beta"],
        &[("ARGCLASS_FORMAT", "json")],
    );
    assert!(out.status.success());
    assert_eq!(
        stdout_of(&out),
        "{\"COMMANDS\":[],\"OPTIONS\":{\"--option\":\"alpha\",\"-X\":\"\",\"-y\":\"beta\"},\"ERRORS\":[]}\n"
    );
}

// ── 4. Strict mode ───────────────────────────────────────────────────────────

#[test]
fn test_cli_strict_mode_fails_on_errors() {
    let out = run_with(&["foo", "-x", "bar", "baz"], &[("ARGCLASS_STRICT", "1")]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr_of(&out);
    assert!(err.contains("1 malformed argument(s): baz"), "stderr: {}", err);
    // the result is still printed
    assert!(stdout_of(&out).contains("[0] => baz"));
}

#[test]
fn test_cli_strict_mode_passes_clean_input() {
    let out = run_with(&["-x", "alpha"], &[("ARGCLASS_STRICT", "1")]);
    assert!(out.status.success());
}

// ── 5. Trace output ──────────────────────────────────────────────────────────

#[test]
fn test_cli_trace_lists_each_token() {
    let out = run_with(&["cmd", "-x", "val", "oops"], &[("ARGCLASS_DISPLAY_LEVEL", "4")]);
    assert!(out.status.success());
    let err = stderr_of(&out);
    assert!(err.contains("command  \"cmd\""), "stderr: {}", err);
    assert!(err.contains("option   \"-x\""), "stderr: {}", err);
    assert!(err.contains("value    \"val\""), "stderr: {}", err);
    assert!(err.contains("error    \"oops\""), "stderr: {}", err);
    assert!(err.contains("1 command(s), 1 option(s), 1 error(s)"), "stderr: {}", err);
}

// ── 6. Non-UTF-8 arguments ───────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_argument_is_listed_as_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let bad = OsString::from_vec(vec![b'-', b'x', 0xff]);
    let out = Command::new(argclass_bin())
        .arg("cmd")
        .arg(&bad)
        .env("ARGCLASS_FORMAT", "json")
        .env_remove("ARGCLASS_STRICT")
        .env_remove("ARGCLASS_DISPLAY_LEVEL")
        .output()
        .expect("failed to run argclass");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    let json: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(json["COMMANDS"], serde_json::json!(["cmd"]));
    assert_eq!(json["OPTIONS"], serde_json::json!({}));
    assert_eq!(json["ERRORS"], serde_json::json!(["-x\u{FFFD}"]));
}

#[test]
fn test_cli_default_level_has_quiet_stderr() {
    let out = run_with(&["cmd", "-x"], &[]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", stderr_of(&out));
}
