//! Command-line token classifier.
//!
//! Partitions a raw argument list into commands, options with their values,
//! and malformed tokens in a single left-to-right pass:
//!
//! | Token                          | Condition                          | Result  |
//! |--------------------------------|------------------------------------|---------|
//! | bare (no leading `-`)          | no option seen yet                 | command |
//! | bare                           | last option has no value yet       | value   |
//! | bare                           | every option already has a value   | error   |
//! | `-x` / `--name`                | valid option shape                 | option  |
//! | any other `-…`                 |                                    | error   |
//!
//! An option followed by another option or by end of input gets the empty
//! string as its value. Repeated options keep their first position and the
//! last value.
//!
//! | Submodule | Responsibility |
//! |-----------|----------------|
//! | [`shape`] | Short/long option predicates. |
//! | [`state`] | [`Classifier`] — the queue-based state machine. |
//! | [`types`] | [`Classification`], [`OptionMap`], [`TokenKind`], [`ClassifyError`]. |

pub mod shape;
pub mod state;
pub mod types;

pub use state::Classifier;
pub use types::{Classification, ClassifyError, OptionMap, TokenKind};

/// Classify `tokens` (the program arguments without the program name).
///
/// Returns [`ClassifyError::EmptyInput`] when `tokens` is empty. Malformed
/// tokens never produce an `Err`; they are listed in
/// [`Classification::errors`].
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<Classification, ClassifyError> {
    if tokens.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    let mut classifier = Classifier::new();
    for token in tokens {
        classifier.push(token.as_ref())?;
    }
    classifier.finish()
}

/// Owned-iterator form of [`classify`], e.g. for `std::env::args().skip(1)`.
pub fn classify_args<I>(args: I) -> Result<Classification, ClassifyError>
where
    I: IntoIterator<Item = String>,
{
    let mut classifier = Classifier::new();
    for arg in args {
        classifier.push(arg)?;
    }
    if classifier.seen() == 0 {
        return Err(ClassifyError::EmptyInput);
    }
    classifier.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(classify(&none), Err(ClassifyError::EmptyInput));
        assert_eq!(classify_args(Vec::new()), Err(ClassifyError::EmptyInput));
    }

    #[test]
    fn commands_then_options() {
        let r = classify(&["cmd1", "cmd2", "-x", "-y", "alpha"]).unwrap();
        assert_eq!(r.commands(), ["cmd1".to_owned(), "cmd2".to_owned()]);
        let pairs: Vec<(&str, &str)> = r.options().iter().collect();
        assert_eq!(pairs, vec![("-x", ""), ("-y", "alpha")]);
        assert!(r.errors().is_empty());
    }

    #[test]
    fn classify_args_matches_classify() {
        let argv = ["foo", "-x", "bar", "baz"];
        let owned: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        assert_eq!(classify(&argv), classify_args(owned));
    }

    #[test]
    fn quoted_value_with_space_is_one_token() {
        let r = classify(&["-z", "charlie delta"]).unwrap();
        assert_eq!(r.options().get("-z"), Some("charlie delta"));
    }
}
