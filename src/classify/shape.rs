// classify/shape.rs — Option-shape predicates.
//
// Short option: `-` followed by exactly one ASCII letter.
// Long option:  `--` followed by two or more of `[A-Za-z0-9_]`.
//
// Everything else that starts with a dash is malformed.

use crate::config::{
    DASH, LONG_OPTION_MIN_LEN, LONG_OPTION_PREFIX, SHORT_OPTION_LEN, SHORT_OPTION_PREFIX,
};

/// Returns `true` if `token` begins with `-`.
///
/// Bare tokens (this returns `false`) are commands or values; dash-prefixed
/// tokens are options or errors. The empty string is bare.
#[inline]
pub fn is_dash_prefixed(token: &str) -> bool {
    token.starts_with(DASH)
}

#[inline]
fn is_long_option_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns `true` if `token` is a short option such as `-h` or `-X`.
///
/// `-1`, `-ab`, `-` and `--` are all rejected.
pub fn is_short_option(token: &str) -> bool {
    match token.strip_prefix(SHORT_OPTION_PREFIX) {
        Some(rest) => {
            rest.len() == SHORT_OPTION_LEN && rest.bytes().all(|b| b.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Returns `true` if `token` is a long option such as `--help` or `--dry_run2`.
///
/// The name after `--` must be at least two characters drawn from letters,
/// digits and underscore; `--a`, `---ab` and `--no-crc` are rejected.
pub fn is_long_option(token: &str) -> bool {
    match token.strip_prefix(LONG_OPTION_PREFIX) {
        Some(name) => name.len() >= LONG_OPTION_MIN_LEN && name.bytes().all(is_long_option_char),
        None => false,
    }
}

/// Returns `true` if `token` has either valid option shape.
#[inline]
pub fn is_option(token: &str) -> bool {
    is_short_option(token) || is_long_option(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- is_dash_prefixed ---

    #[test]
    fn dash_prefixed_basic() {
        assert!(is_dash_prefixed("-x"));
        assert!(is_dash_prefixed("--"));
        assert!(is_dash_prefixed("-"));
        assert!(!is_dash_prefixed("cmd"));
    }

    #[test]
    fn empty_token_is_bare() {
        assert!(!is_dash_prefixed(""));
    }

    // --- is_short_option ---

    #[test]
    fn short_option_single_letter() {
        assert!(is_short_option("-x"));
        assert!(is_short_option("-X"));
    }

    #[test]
    fn short_option_rejects_digit() {
        assert!(!is_short_option("-1"));
    }

    #[test]
    fn short_option_rejects_grouped_letters() {
        assert!(!is_short_option("-ab"));
    }

    #[test]
    fn short_option_rejects_lone_dash() {
        assert!(!is_short_option("-"));
    }

    #[test]
    fn short_option_rejects_double_dash() {
        // "--" strips to "-", which is not alphabetic
        assert!(!is_short_option("--"));
        assert!(!is_short_option("--x"));
    }

    #[test]
    fn trailing_newline_is_not_an_option() {
        assert!(!is_short_option("-x\n"));
        assert!(!is_long_option("--help\n"));
    }

    #[test]
    fn short_option_rejects_non_ascii_letter() {
        // 'é' is alphabetic in Unicode but two bytes in UTF-8
        assert!(!is_short_option("-é"));
    }

    // --- is_long_option ---

    #[test]
    fn long_option_basic() {
        assert!(is_long_option("--help"));
        assert!(is_long_option("--ab"));
        assert!(is_long_option("--dry_run2"));
        assert!(is_long_option("--42"));
    }

    #[test]
    fn long_option_rejects_single_char_name() {
        assert!(!is_long_option("--a"));
    }

    #[test]
    fn long_option_rejects_bare_double_dash() {
        assert!(!is_long_option("--"));
    }

    #[test]
    fn long_option_rejects_hyphen_in_name() {
        assert!(!is_long_option("--no-crc"));
        assert!(!is_long_option("---ab"));
    }

    #[test]
    fn long_option_rejects_equals_binding() {
        assert!(!is_long_option("--level=5"));
    }

    #[test]
    fn long_option_rejects_single_dash() {
        assert!(!is_long_option("-help"));
    }

    // --- is_option ---

    #[test]
    fn is_option_either_shape() {
        assert!(is_option("-v"));
        assert!(is_option("--verbose"));
        assert!(!is_option("-vv"));
        assert!(!is_option("verbose"));
    }
}
