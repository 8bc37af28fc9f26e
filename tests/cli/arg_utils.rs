// Integration tests for cli/arg_utils.rs — harness helpers
//
//   - `last_name_from_path`
//   - `exe_name_match`
//   - `read_u32_from_str`

use argclass::cli::arg_utils::{exe_name_match, last_name_from_path, read_u32_from_str};

// ─────────────────────────────────────────────────────────────────────────────
// last_name_from_path
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn last_name_from_path_unix() {
    assert_eq!(last_name_from_path("/opt/bin/argclass-json"), "argclass-json");
}

#[test]
fn last_name_from_path_mixed_separators() {
    assert_eq!(last_name_from_path("a/b\\argclass"), "argclass");
}

#[test]
fn last_name_from_path_trailing_slash_is_empty() {
    assert_eq!(last_name_from_path("/opt/bin/"), "");
}

// ─────────────────────────────────────────────────────────────────────────────
// exe_name_match
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn exe_name_match_alias_with_extension() {
    assert!(exe_name_match("argclass-json.exe", "argclass-json"));
}

#[test]
fn exe_name_match_plain_binary_is_not_alias() {
    assert!(!exe_name_match("argclass", "argclass-json"));
    assert!(!exe_name_match("argclass-json2", "argclass-json"));
}

// ─────────────────────────────────────────────────────────────────────────────
// read_u32_from_str
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn read_u32_multi_digit() {
    assert_eq!(read_u32_from_str("1234"), Some((1234, "")));
}

#[test]
fn read_u32_leading_space_rejected() {
    assert_eq!(read_u32_from_str(" 1"), None);
}
