// cli/help.rs — Usage text and the fatal-exit helper.
//
// Functions:
//   usage_text   → the usage block as a String
//   print_usage  → writes usage_text to stderr
//   error_out    → prints a message and exits 1

use crate::cli::constants::display_level;
use crate::config::{ENV_DISPLAY_LEVEL, ENV_FORMAT, ENV_STRICT};

/// Build the usage block for `program`.
pub fn usage_text(program: &str) -> String {
    let mut s = String::new();
    s.push_str("Usage : \n");
    s.push_str(&format!(
        "      {} [<command1> ... <commandN>] [<opt1> [<value1>] ... <optN> [<valueN>]] \n",
        program
    ));
    s.push('\n');
    s.push_str("command : an argument that does not start with '-'; only allowed before the first option \n");
    s.push_str("option  : -x   (one letter) \n");
    s.push_str("          --name (two or more letters, digits or '_') \n");
    s.push_str("value   : the argument right after an option; options without one get \"\" \n");
    s.push('\n');
    s.push_str("Anything else is listed under ERRORS. \n");
    s.push('\n');
    s.push_str("Environment : \n");
    s.push_str(&format!(" {:<24}: text (default) or json \n", ENV_FORMAT));
    s.push_str(&format!(" {:<24}: non-zero exits 1 when ERRORS is not empty \n", ENV_STRICT));
    s.push_str(&format!(" {:<24}: 0 (silent) .. 4 (trace each argument), default 2 \n", ENV_DISPLAY_LEVEL));
    s.push('\n');
    s.push_str("Examples : \n");
    s.push_str(&format!("      {} some command -x alpha -Y beta -z \"charlie delta\" \n", program));
    s.push_str(&format!("      {} some command --option alpha -X -y beta \n", program));
    s
}

/// Print usage to stderr.
pub fn print_usage(program: &str) {
    eprint!("{}", usage_text(program));
}

/// Print `msg` to stderr (at display level 1) then exit with code 1.
pub fn error_out(msg: &str) -> ! {
    if display_level() >= 1 {
        eprintln!("{} ", msg);
    }
    std::process::exit(1);
}
