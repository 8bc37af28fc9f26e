// config.rs — Compile-time configuration constants.
//
// Shape rules for options and the names/defaults of the environment
// variables read by the `argclass` binary. Runtime values are resolved in
// `cli::init`; this file only holds the fixed defaults.

// Prefix shared by every dash-prefixed token.
pub const DASH: char = '-';

// Prefix of a short option (`-x`).
pub const SHORT_OPTION_PREFIX: &str = "-";

// Prefix of a long option (`--name`).
pub const LONG_OPTION_PREFIX: &str = "--";

// A short option carries exactly this many alphabetic characters.
pub const SHORT_OPTION_LEN: usize = 1;

// A long option carries at least this many `[A-Za-z0-9_]` characters.
pub const LONG_OPTION_MIN_LEN: usize = 2;

// Output format selector: `text` (print_r layout) or `json`.
pub const ENV_FORMAT: &str = "ARGCLASS_FORMAT";

// Non-zero turns malformed tokens into a failing exit status.
pub const ENV_STRICT: &str = "ARGCLASS_STRICT";

// Display level 0..=4, same scale as the `displaylevel!` macro.
pub const ENV_DISPLAY_LEVEL: &str = "ARGCLASS_DISPLAY_LEVEL";

// Default display level (2 = normal).
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest meaningful display level (4 = per-token trace).
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Strict mode is off by default: exit 0 even when ERRORS is populated.
pub const STRICT_DEFAULT: bool = false;
