// Integration tests for cli/render.rs — text and JSON output

use argclass::classify;
use argclass::cli::init::OutputFormat;
use argclass::cli::render::{render, render_json, render_text};

#[test]
fn text_scenario_a_layout() {
    let r = classify(&["cmd1", "cmd2", "-x", "-y", "alpha"]).unwrap();
    let expected = "\
Array
(
    [COMMANDS] => Array
        (
            [0] => cmd1
            [1] => cmd2
        )

    [OPTIONS] => Array
        (
            [-x] => 
            [-y] => alpha
        )

    [ERRORS] => Array
        (
        )

)
";
    assert_eq!(render_text(&r), expected);
}

#[test]
fn json_scenario_d() {
    let r = classify(&["foo", "-x", "bar", "baz"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&render_json(&r).unwrap()).unwrap();
    assert_eq!(json["COMMANDS"], serde_json::json!(["foo"]));
    assert_eq!(json["OPTIONS"]["-x"], "bar");
    assert_eq!(json["ERRORS"], serde_json::json!(["baz"]));
}

#[test]
fn json_escapes_special_characters() {
    let r = classify(&["-z", "say \"hi\""]).unwrap();
    let out = render(&r, OutputFormat::Json).unwrap();
    assert!(out.contains(r#""-z":"say \"hi\"""#), "got: {}", out);
}
