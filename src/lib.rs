// argclass — command-line argument classifier

pub mod config;
pub mod classify;
pub mod cli;

/// Version string shown in the display-level 3 banner.
pub const ARGCLASS_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use classify::{
    classify, classify_args, Classification, Classifier, ClassifyError, OptionMap, TokenKind,
};
