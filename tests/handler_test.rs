use soutk::EchoHandler;
use soutk::handle;
use soutk::handler::{Handler, Verdict};

const PROMPT: &str = "Please enter Soutk code to run.";

#[test]
fn empty_string_prompts() {
    assert_eq!(handle(""), PROMPT);
}

#[test]
fn spaces_prompt() {
    assert_eq!(handle("   "), PROMPT);
}

#[test]
fn tabs_and_newlines_prompt() {
    assert_eq!(handle("\t\n\r\n  \t"), PROMPT);
}

#[test]
fn code_is_echoed_under_header() {
    assert_eq!(handle("print(1)"), "Output (simulated):\nprint(1)");
}

#[test]
fn echo_uses_untrimmed_input() {
    assert_eq!(handle("  print(1)  "), "Output (simulated):\n  print(1)  ");
}

#[test]
fn repeated_calls_agree() {
    let first = handle("chant \"hello\"");
    let second = handle("chant \"hello\"");
    assert_eq!(first, second);
}

#[test]
fn verdicts_match_text() {
    let prompted = EchoHandler.handle(" \n");
    assert_eq!(prompted.verdict, Verdict::Prompted);
    assert_eq!(prompted.text, PROMPT);

    let echoed = EchoHandler.handle("x");
    assert_eq!(echoed.verdict, Verdict::Echoed);
    assert!(echoed.text.starts_with("Output (simulated):\n"));
}

#[test]
fn unicode_code_is_echoed() {
    assert_eq!(handle("✨ cast 🪄"), "Output (simulated):\n✨ cast 🪄");
}

#[test]
fn bom_prefixed_blank_program_prompts() {
    assert_eq!(handle("\u{feff}\n\n"), PROMPT);
}

#[test]
fn bom_before_code_is_echoed_with_it() {
    assert_eq!(
        handle("\u{feff}chant 1"),
        "Output (simulated):\n\u{feff}chant 1"
    );
}

#[test]
fn next_line_char_alone_is_echoed() {
    assert_eq!(handle(" \u{85} "), "Output (simulated):\n \u{85} ");
}
