// e2e/scenarios.rs — documented classification scenarios through the binary
//
// Each case runs `argclass` with JSON output and compares the parsed object.

use std::path::PathBuf;
use std::process::Command;

use serde_json::{json, Value};

fn argclass_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_argclass") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("argclass");
    p
}

fn classify_json(args: &[&str]) -> Value {
    let out = Command::new(argclass_bin())
        .args(args)
        .env("ARGCLASS_FORMAT", "json")
        .env_remove("ARGCLASS_STRICT")
        .env_remove("ARGCLASS_DISPLAY_LEVEL")
        .output()
        .expect("failed to run argclass");
    assert!(out.status.success(), "argclass {:?} failed", args);
    serde_json::from_slice(&out.stdout).expect("stdout should be JSON")
}

#[test]
fn scenario_a() {
    assert_eq!(
        classify_json(&["cmd1", "cmd2", "-x", "-y", "alpha"]),
        json!({"COMMANDS": ["cmd1", "cmd2"], "OPTIONS": {"-x": "", "-y": "alpha"}, "ERRORS": []})
    );
}

#[test]
fn scenario_b() {
    assert_eq!(
        classify_json(&["-x", "alpha", "-y", "beta"]),
        json!({"COMMANDS": [], "OPTIONS": {"-x": "alpha", "-y": "beta"}, "ERRORS": []})
    );
}

#[test]
fn scenario_c() {
    assert_eq!(
        classify_json(&["--option", "alpha", "-X", "-y", "beta"]),
        json!({"COMMANDS": [], "OPTIONS": {"--option": "alpha", "-X": "", "-y": "beta"}, "ERRORS": []})
    );
}

#[test]
fn scenario_d() {
    assert_eq!(
        classify_json(&["foo", "-x", "bar", "baz"]),
        json!({"COMMANDS": ["foo"], "OPTIONS": {"-x": "bar"}, "ERRORS": ["baz"]})
    );
}

#[test]
fn scenario_e() {
    assert_eq!(
        classify_json(&["-1"]),
        json!({"COMMANDS": [], "OPTIONS": {}, "ERRORS": ["-1"]})
    );
}

#[test]
fn lone_dashes() {
    assert_eq!(
        classify_json(&["-", "--"]),
        json!({"COMMANDS": [], "OPTIONS": {}, "ERRORS": ["-", "--"]})
    );
}

#[test]
fn value_with_space_stays_whole() {
    let v = classify_json(&["some", "command", "-z", "charlie delta"]);
    assert_eq!(v["OPTIONS"]["-z"], "charlie delta");
}
