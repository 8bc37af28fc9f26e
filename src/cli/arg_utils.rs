// cli/arg_utils.rs — Helpers for the harness: argv[0] matching and small
// numeric parsing for environment values.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns `true` if `exe_name` is `name`, optionally followed by an extension.
///
/// `argclass-json.exe` matches `argclass-json`; `argclass-jsonx` does not.
pub fn exe_name_match(exe_name: &str, name: &str) -> bool {
    if let Some(rest) = exe_name.strip_prefix(name) {
        rest.is_empty() || rest.starts_with('.')
    } else {
        false
    }
}

/// Parses an unsigned 32-bit integer from the start of `s`.
///
/// Returns `None` if `s` does not start with a digit, otherwise the value and
/// the unconsumed remainder. Overflow saturates at `u32::MAX`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value = s.as_bytes()[..digits].iter().fold(0u32, |acc, &b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as u32)
    });
    Some((value, &s[digits..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- last_name_from_path ---

    #[test]
    fn test_last_name_from_path_unix() {
        assert_eq!(last_name_from_path("/usr/local/bin/argclass"), "argclass");
    }

    #[test]
    fn test_last_name_from_path_windows() {
        assert_eq!(last_name_from_path("C:\\tools\\argclass.exe"), "argclass.exe");
    }

    #[test]
    fn test_last_name_from_path_no_separator() {
        assert_eq!(last_name_from_path("argclass"), "argclass");
    }

    // --- exe_name_match ---

    #[test]
    fn test_exe_name_match_exact() {
        assert!(exe_name_match("argclass-json", "argclass-json"));
    }

    #[test]
    fn test_exe_name_match_with_extension() {
        assert!(exe_name_match("argclass-json.exe", "argclass-json"));
    }

    #[test]
    fn test_exe_name_match_prefix_only() {
        assert!(!exe_name_match("argclass-jsonx", "argclass-json"));
        assert!(!exe_name_match("argclass", "argclass-json"));
    }

    // --- read_u32_from_str ---

    #[test]
    fn test_read_u32_plain() {
        assert_eq!(read_u32_from_str("4"), Some((4, "")));
    }

    #[test]
    fn test_read_u32_trailing_garbage() {
        assert_eq!(read_u32_from_str("3abc"), Some((3, "abc")));
    }

    #[test]
    fn test_read_u32_no_digits() {
        assert_eq!(read_u32_from_str(""), None);
        assert_eq!(read_u32_from_str("yes"), None);
        assert_eq!(read_u32_from_str("-1"), None);
    }

    #[test]
    fn test_read_u32_saturates() {
        assert_eq!(read_u32_from_str("99999999999"), Some((u32::MAX, "")));
    }
}
