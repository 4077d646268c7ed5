/// The code being written at the REPL prompt, one entry per line.
/// Running it does not clear it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    lines: Vec<String>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
