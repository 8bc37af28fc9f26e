//! Binary entry point for the `argclass` command-line tool.
//!
//! Classifies its own arguments and prints the result.
//!
//! # Control flow
//!
//! 1. [`detect_alias`] reads `argv[0]` and the `ARGCLASS_*` environment
//!    variables into a [`CliInit`].
//! 2. [`run`] feeds every remaining argument through a [`Classifier`],
//!    tracing each decision at display level 4.
//! 3. The result is rendered as text or JSON on stdout and the exit code is
//!    chosen: 0, or 1 in strict mode when ERRORS is not empty.
//!
//! Empty input prints usage and exits 1. A broken internal invariant exits 2.

use argclass::classify::{Classifier, ClassifyError};
use argclass::cli::constants::{display_level, set_display_level, PROGRAM_NAME};
use argclass::cli::help::{error_out, print_usage};
use argclass::cli::init::{detect_alias, CliInit, OutputFormat};
use argclass::cli::render::render;
use argclass::{display, displaylevel, displayout};

/// Exit status for a broken classifier invariant.
const EXIT_INTERNAL: i32 = 2;

/// Classify `tokens`, print the result, and return the process exit code.
fn run(init: &CliInit, tokens: Vec<String>) -> anyhow::Result<i32> {
    displaylevel!(
        3,
        "*** {} v{} ***\n",
        PROGRAM_NAME,
        argclass::ARGCLASS_VERSION_STRING
    );

    let mut classifier = Classifier::new();
    for (idx, token) in tokens.iter().enumerate() {
        let kind = classifier.push(token.as_str())?;
        displaylevel!(4, "{:>4} : {:<8} {:?}\n", idx + 1, kind.as_str(), token);
    }
    if classifier.seen() == 0 {
        return Err(ClassifyError::EmptyInput.into());
    }
    let result = classifier.finish()?;

    displaylevel!(
        3,
        "{} command(s), {} option(s), {} error(s)\n",
        result.commands().len(),
        result.options().len(),
        result.errors().len()
    );

    let rendered = render(&result, init.format)?;
    match init.format {
        OutputFormat::Text => displayout!("\n{}\n\n", rendered),
        OutputFormat::Json => displayout!("{}\n", rendered),
    }

    if result.has_errors() && init.strict {
        displaylevel!(
            1,
            "{}: {} malformed argument(s): {}\n",
            init.exe_name,
            result.errors().len(),
            result.errors().join(" ")
        );
        return Ok(1);
    }
    Ok(0)
}

fn main() {
    // Arguments that are not valid UTF-8 are converted lossily so they still
    // reach the classifier (and end up in ERRORS) instead of aborting.
    let mut argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let argv0 = argv.next().unwrap_or_else(|| PROGRAM_NAME.to_owned());
    let init = detect_alias(&argv0);
    set_display_level(init.display_level);

    let tokens: Vec<String> = argv.collect();

    let exit_code = match run(&init, tokens) {
        Ok(code) => code,
        Err(e) => match e.downcast_ref::<ClassifyError>() {
            Some(ClassifyError::EmptyInput) => {
                if display_level() >= 1 {
                    print_usage(&init.exe_name);
                }
                error_out(&format!("{}: {}", init.exe_name, e));
            }
            Some(err) if err.is_internal() => {
                display!("{}: {}\n", init.exe_name, err);
                EXIT_INTERNAL
            }
            _ => {
                display!("{}: {}\n", init.exe_name, e);
                1
            }
        },
    };
    std::process::exit(exit_code);
}
