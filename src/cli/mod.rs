//! Harness around the classifier for the `argclass` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the `DISPLAY_LEVEL` global and the `display*!` macros. |
//! | [`arg_utils`] | Path basename, executable-name matching, integer parsing for env values. |
//! | [`init`]      | `CliInit` — settings from the binary name and `ARGCLASS_*` variables. |
//! | [`help`]      | Usage text and `error_out`. |
//! | [`render`]    | Text (`print_r`) and JSON output of a classification. |
//!
//! Typical call sequence: `detect_alias` → `classify_args` → `render`.

pub mod constants;
pub mod arg_utils;
pub mod init;
pub mod help;
pub mod render;
