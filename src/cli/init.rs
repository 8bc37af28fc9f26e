//! Harness initialisation from the binary name and the environment.
//!
//! Every command-line token belongs to the classifier, so `argclass` has no
//! flags of its own. Its settings come from `argv[0]` (the `argclass-json`
//! alias selects JSON output) and from `ARGCLASS_*` environment variables,
//! which override the alias.
//!
//! Each environment reader has a `*_from(Option<&str>)` core that takes the
//! raw value, so the parsing is testable without touching the process
//! environment.

use crate::cli::arg_utils::{exe_name_match, last_name_from_path, read_u32_from_str};
use crate::cli::constants::{display_level, ARGCLASS_JSON};
use crate::config::{
    DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, ENV_DISPLAY_LEVEL, ENV_FORMAT, ENV_STRICT,
    STRICT_DEFAULT,
};

/// How the classification result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Nested `print_r`-style listing.
    #[default]
    Text,
    /// A single JSON object with `COMMANDS`, `OPTIONS` and `ERRORS` keys.
    Json,
}

impl OutputFormat {
    /// Parses `text` or `json`, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("text") {
            Some(OutputFormat::Text)
        } else if name.eq_ignore_ascii_case("json") {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}

/// Harness settings resolved before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// Output format for the rendered result.
    pub format: OutputFormat,
    /// Exit with status 1 when any token lands in ERRORS.
    pub strict: bool,
    /// Display level to apply via `set_display_level`.
    pub display_level: u32,
    /// argv[0] basename, used in messages.
    pub exe_name: String,
}

/// Build the initial settings from `argv0` and the process environment.
pub fn detect_alias(argv0: &str) -> CliInit {
    let exe_name = last_name_from_path(argv0);

    let mut format = OutputFormat::Text;
    if exe_name_match(exe_name, ARGCLASS_JSON) {
        format = OutputFormat::Json;
    }

    CliInit {
        format: init_format_from(std::env::var(ENV_FORMAT).ok().as_deref(), format),
        strict: init_strict_from(std::env::var(ENV_STRICT).ok().as_deref()),
        display_level: init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref()),
        exe_name: exe_name.to_owned(),
    }
}

/// Resolve the output format from an optional `ARGCLASS_FORMAT` value,
/// falling back to `default` when unset or unrecognised.
pub fn init_format_from(env_val: Option<&str>, default: OutputFormat) -> OutputFormat {
    if let Some(env) = env_val {
        if let Some(format) = OutputFormat::from_name(env) {
            return format;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: expected text or json ",
                ENV_FORMAT, env
            );
        }
    }
    default
}

/// Resolve strict mode from an optional `ARGCLASS_STRICT` value.
///
/// A leading number enables strict mode when non-zero; anything else keeps
/// the default.
pub fn init_strict_from(env_val: Option<&str>) -> bool {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val != 0;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_STRICT, env
            );
        }
    }
    STRICT_DEFAULT
}

/// Resolve the display level from an optional `ARGCLASS_DISPLAY_LEVEL` value,
/// clamped to the highest meaningful level.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val.min(DISPLAY_LEVEL_MAX);
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_DISPLAY_LEVEL, env
            );
        }
    }
    DISPLAY_LEVEL_DEFAULT
}
