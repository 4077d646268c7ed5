use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};

use super::Surface;

/// Prints each text on its own, followed by a newline.
///
/// The newline is terminal framing, not part of the display text: a
/// one-shot run writes `handle(code)` plus `\n`, the way `echo` would, so
/// the shell prompt starts on a fresh line. Strip one trailing newline to
/// recover the exact text. A terminal can't un-print, so "replace" here
/// means the newest block is the one on screen.
pub struct TerminalSurface<W: Write + Send = Stdout> {
    out: W,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn replace(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("failed to write output")?;
        self.out.flush().context("failed to flush output")?;
        Ok(())
    }
}
