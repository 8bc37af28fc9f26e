// Integration tests for cli/init.rs — harness settings from the environment
//
// Only the `*_from` cores are exercised here; they take the raw variable value
// so no test mutates the process environment.

use argclass::cli::init::{
    init_display_level_from, init_format_from, init_strict_from, OutputFormat,
};
use argclass::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

#[test]
fn format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(init_format_from(None, OutputFormat::default()), OutputFormat::Text);
}

#[test]
fn format_json_is_case_insensitive() {
    assert_eq!(init_format_from(Some("JSON"), OutputFormat::Text), OutputFormat::Json);
}

#[test]
fn format_unknown_keeps_alias_choice() {
    assert_eq!(init_format_from(Some(""), OutputFormat::Json), OutputFormat::Json);
}

#[test]
fn strict_leading_digits() {
    assert!(init_strict_from(Some("2")));
    assert!(init_strict_from(Some("1 please")));
    assert!(!init_strict_from(Some("00")));
}

#[test]
fn display_level_clamped() {
    assert_eq!(init_display_level_from(Some("4")), 4);
    assert_eq!(init_display_level_from(Some("100")), DISPLAY_LEVEL_MAX);
    assert_eq!(init_display_level_from(Some("")), DISPLAY_LEVEL_DEFAULT);
}
