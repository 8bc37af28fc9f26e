// cli/constants.rs — Program identity, display level and display macros.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "argclass";

/// Alias binary name that selects JSON output by default.
pub const ARGCLASS_JSON: &str = "argclass-json";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = banner and summary;
// 4 = per-token trace.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr only when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_constant() {
        assert_eq!(PROGRAM_NAME, "argclass");
        assert!(ARGCLASS_JSON.starts_with(PROGRAM_NAME));
    }

    #[test]
    fn display_level_round_trip() {
        // Other tests may mutate the global; restore after checking.
        let prev = display_level();
        set_display_level(4);
        assert_eq!(display_level(), 4);
        set_display_level(prev);
    }
}
