// classify/types.rs — Result and error types produced by the classifier.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

// ─────────────────────────────────────────────────────────────────────────────
// Token kind
// ─────────────────────────────────────────────────────────────────────────────

/// What a single input token was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare token seen before any option.
    Command,
    /// Token with a valid short or long option shape.
    Option,
    /// Bare token attached to the pending option.
    Value,
    /// Malformed dash token, or a bare token with nowhere to attach.
    Error,
}

impl TokenKind {
    /// Lower-case label used in trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Command => "command",
            TokenKind::Option => "option",
            TokenKind::Value => "value",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Failures that stop classification.
///
/// Malformed tokens are never reported here; they are collected into
/// [`Classification::errors`]. `Unbalanced` and `CountMismatch` indicate a
/// bookkeeping defect in the classifier itself and cannot be produced by any
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// No tokens were supplied.
    EmptyInput,
    /// `options - values` left the range `0..=1` during the pass.
    Unbalanced { options: usize, values: usize },
    /// Option and value counts differ after the final padding step.
    CountMismatch { options: usize, values: usize },
}

impl ClassifyError {
    /// `true` for invariant violations, `false` for caller errors.
    pub fn is_internal(&self) -> bool {
        !matches!(self, ClassifyError::EmptyInput)
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::EmptyInput => f.write_str("no commands or options given"),
            ClassifyError::Unbalanced { options, values } => write!(
                f,
                "internal error: difference between number of options ({}) and values ({}) is neither 0 nor 1",
                options, values
            ),
            ClassifyError::CountMismatch { options, values } => write!(
                f,
                "internal error: number of options ({}) and values ({}) are not equal",
                options, values
            ),
        }
    }
}

impl std::error::Error for ClassifyError {}

// ─────────────────────────────────────────────────────────────────────────────
// OptionMap
// ─────────────────────────────────────────────────────────────────────────────

/// Insertion-ordered map from option string to its value.
///
/// Re-inserting an existing key replaces the value but keeps the key at the
/// position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(option, value)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Output of a completed classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Classification {
    /// Bare tokens that preceded every option, in input order.
    #[serde(rename = "COMMANDS")]
    pub(crate) commands: Vec<String>,
    /// Option string → value (empty when the option had no value).
    #[serde(rename = "OPTIONS")]
    pub(crate) options: OptionMap,
    /// Offending raw tokens, in input order.
    #[serde(rename = "ERRORS")]
    pub(crate) errors: Vec<String>,
}

impl Classification {
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `true` if any token was malformed or misplaced.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, OptionMap, Vec<String>) {
        (self.commands, self.options, self.errors)
    }
}
