//! Output rendering for a [`Classification`].
//!
//! Two formats are supported:
//!
//! - **text** — the nested `print_r` listing:
//!
//!   ```text
//!   Array
//!   (
//!       [COMMANDS] => Array
//!           (
//!               [0] => some
//!           )
//!
//!       [OPTIONS] => Array
//!           (
//!               [-x] => alpha
//!           )
//!
//!       [ERRORS] => Array
//!           (
//!           )
//!
//!   )
//!   ```
//!
//! - **json** — `{"COMMANDS":[...],"OPTIONS":{...},"ERRORS":[...]}` with
//!   options in first-occurrence order.

use std::fmt::Write as _;

use crate::classify::Classification;
use crate::cli::init::OutputFormat;

const INNER_INDENT: &str = "        ";

fn push_group<'a, I>(out: &mut String, name: &str, entries: I)
where
    I: IntoIterator<Item = (String, &'a str)>,
{
    let _ = writeln!(out, "    [{}] => Array", name);
    let _ = writeln!(out, "{}(", INNER_INDENT);
    for (key, value) in entries {
        let _ = writeln!(out, "{}    [{}] => {}", INNER_INDENT, key, value);
    }
    let _ = writeln!(out, "{})", INNER_INDENT);
    out.push('\n');
}

/// Render `result` in the `print_r` layout.
pub fn render_text(result: &Classification) -> String {
    let mut out = String::from("Array\n(\n");
    push_group(
        &mut out,
        "COMMANDS",
        result
            .commands()
            .iter()
            .enumerate()
            .map(|(i, c)| (i.to_string(), c.as_str())),
    );
    push_group(
        &mut out,
        "OPTIONS",
        result.options().iter().map(|(k, v)| (k.to_owned(), v)),
    );
    push_group(
        &mut out,
        "ERRORS",
        result
            .errors()
            .iter()
            .enumerate()
            .map(|(i, e)| (i.to_string(), e.as_str())),
    );
    out.push_str(")\n");
    out
}

/// Render `result` as a compact JSON object.
pub fn render_json(result: &Classification) -> anyhow::Result<String> {
    Ok(serde_json::to_string(result)?)
}

/// Render `result` in `format`.
pub fn render(result: &Classification, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}
