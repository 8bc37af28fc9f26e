// classify/state.rs — Single-pass classification state machine.
//
// Four queues are kept in input order: commands, options, values, errors.
// `options` and `values` move in lock-step; their length difference (the
// balance) is always 0 or 1. A balance of 1 means the last option is still
// waiting for its value.

use crate::classify::shape::{is_dash_prefixed, is_option};
use crate::classify::types::{Classification, ClassifyError, OptionMap, TokenKind};

/// Incremental classifier.
///
/// Feed tokens with [`Classifier::push`], then call [`Classifier::finish`].
/// [`crate::classify::classify`] wraps this for a whole slice.
#[derive(Debug, Default, Clone)]
pub struct Classifier {
    commands: Vec<String>,
    options: Vec<String>,
    values: Vec<String>,
    errors: Vec<String>,
    seen: usize,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens pushed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// `options - values`, checked against the `0..=1` invariant.
    pub fn balance(&self) -> Result<usize, ClassifyError> {
        match self.options.len().checked_sub(self.values.len()) {
            Some(diff @ (0 | 1)) => Ok(diff),
            _ => Err(ClassifyError::Unbalanced {
                options: self.options.len(),
                values: self.values.len(),
            }),
        }
    }

    /// `true` while the most recent option has no value yet.
    pub fn has_pending_option(&self) -> bool {
        self.options.len() > self.values.len()
    }

    /// Classify one token and append it to the matching queue.
    pub fn push(&mut self, token: impl Into<String>) -> Result<TokenKind, ClassifyError> {
        let token = token.into();
        let balance = self.balance()?;
        self.seen += 1;

        if !is_dash_prefixed(&token) {
            let kind = if self.options.is_empty() {
                self.commands.push(token);
                TokenKind::Command
            } else if balance == 1 {
                self.values.push(token);
                TokenKind::Value
            } else {
                // Every option already has its value; a bare token here has
                // nowhere to go (including a command after options).
                self.errors.push(token);
                TokenKind::Error
            };
            return Ok(kind);
        }

        if !is_option(&token) {
            self.errors.push(token);
            return Ok(TokenKind::Error);
        }

        if balance == 1 {
            // Close out the previous option with no value.
            self.values.push(String::new());
        }
        self.options.push(token);
        Ok(TokenKind::Option)
    }

    /// Pad the trailing option, check the final invariant and zip options
    /// with values into the result.
    pub fn finish(mut self) -> Result<Classification, ClassifyError> {
        self.balance()?;
        if self.options.len() > self.values.len() {
            self.values.push(String::new());
        }
        // Post-condition only: after the balance check and padding above the
        // counts are always equal.
        if self.options.len() != self.values.len() {
            return Err(ClassifyError::CountMismatch {
                options: self.options.len(),
                values: self.values.len(),
            });
        }

        let mut options = OptionMap::new();
        for (option, value) in self.options.into_iter().zip(self.values) {
            options.insert(option, value);
        }

        Ok(Classification {
            commands: self.commands,
            options,
            errors: self.errors,
        })
    }
}
