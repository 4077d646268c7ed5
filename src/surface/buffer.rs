use anyhow::Result;

use super::Surface;

/// Keeps the latest text in memory. Used by tests and embedders that
/// render the output themselves.
#[derive(Debug, Default)]
pub struct BufferSurface {
    content: String,
    writes: usize,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the surface currently shows.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of replacements so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Surface for BufferSurface {
    fn replace(&mut self, text: &str) -> Result<()> {
        self.content.clear();
        self.content.push_str(text);
        self.writes += 1;
        Ok(())
    }
}
