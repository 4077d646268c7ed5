//! Where submitted code comes from.
//!
//! Every source yields the code exactly as stored: nothing is trimmed and
//! trailing newlines are kept, so the handler sees what the user wrote.

pub mod catalog;
pub mod editor;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// A one-shot trigger for the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Code given on the command line.
    Inline(String),
    /// A program file, usually `*.stk`.
    File(PathBuf),
    /// Everything on standard input.
    Stdin,
}

impl Source {
    /// Pick a source from CLI arguments. `-` means stdin.
    pub fn from_args(eval: Option<String>, file: Option<PathBuf>) -> Option<Self> {
        match (eval, file) {
            (Some(code), _) => Some(Source::Inline(code)),
            (None, Some(path)) if path.as_os_str() == "-" => Some(Source::Stdin),
            (None, Some(path)) => Some(Source::File(path)),
            (None, None) => None,
        }
    }

    /// Short label for logs and the banner.
    pub fn label(&self) -> String {
        match self {
            Source::Inline(_) => "inline".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "stdin".to_string(),
        }
    }

    /// Read the code this source points at.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Inline(code) => Ok(code.clone()),
            Source::File(path) => {
                if !path.exists() {
                    bail!("file '{}' not found", path.display());
                }
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read '{}'", path.display()))
            }
            Source::Stdin => read_all(io::stdin().lock()),
        }
    }
}

/// Drain a reader into a string.
pub fn read_all(mut reader: impl Read) -> Result<String> {
    let mut code = String::new();
    reader
        .read_to_string(&mut code)
        .context("failed to read standard input")?;
    Ok(code)
}
