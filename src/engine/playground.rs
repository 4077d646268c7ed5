use anyhow::Result;

use super::{Engine, SessionStats};
use crate::handler::{Handler, Verdict};
use crate::surface::Surface;

/// Wires a Handler to a Surface. The handler computes, the playground
/// does the write-out.
pub struct Playground {
    handler: Box<dyn Handler>,
    surface: Box<dyn Surface>,
    stats: SessionStats,
}

impl Playground {
    pub fn new(handler: Box<dyn Handler>, surface: Box<dyn Surface>) -> Self {
        Self {
            handler,
            surface,
            stats: SessionStats::default(),
        }
    }

    pub fn handler_name(&self) -> &str {
        self.handler.name()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

impl Engine for Playground {
    fn run(&mut self, code: &str) -> Result<String> {
        let response = self.handler.handle(code);

        self.stats.runs += 1;
        match response.verdict {
            Verdict::Echoed => self.stats.echoed += 1,
            Verdict::Prompted => self.stats.prompted += 1,
        }
        tracing::debug!(
            handler = self.handler.name(),
            verdict = ?response.verdict,
            input_bytes = code.len(),
            "handled run"
        );

        self.surface.replace(&response.text)?;
        Ok(response.text)
    }
}
