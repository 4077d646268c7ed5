use super::{Handler, Response, Verdict};
use crate::consts::{EMPTY_INPUT_MESSAGE, SIMULATED_OUTPUT_HEADER};

/// Simulated run: echoes the code back. There is no Soutk backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl Handler for EchoHandler {
    fn name(&self) -> &str {
        "echo (simulated)"
    }

    fn handle(&self, input: &str) -> Response {
        // Emptiness is judged on the trimmed text, but the echo keeps the
        // input exactly as submitted.
        if input.trim_matches(is_blank).is_empty() {
            return Response {
                text: EMPTY_INPUT_MESSAGE.to_string(),
                verdict: Verdict::Prompted,
            };
        }
        let mut text = String::with_capacity(SIMULATED_OUTPUT_HEADER.len() + input.len());
        text.push_str(SIMULATED_OUTPUT_HEADER);
        text.push_str(input);
        Response {
            text,
            verdict: Verdict::Echoed,
        }
    }
}

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// White_Space minus NEL (U+0085), plus the byte order mark (U+FEFF).
pub fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Shorthand for `EchoHandler.handle(input).text`.
pub fn handle(input: &str) -> String {
    EchoHandler.handle(input).text
}
