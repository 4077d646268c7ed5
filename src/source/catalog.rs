use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::consts::PROGRAM_EXTENSION;

/// Soutk programs directly inside `dir`, sorted by file name.
pub fn list_programs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("programs directory '{}' not found", dir.display());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read '{}'", dir.display()))?;

    let mut programs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PROGRAM_EXTENSION) {
            programs.push(path);
        }
    }
    programs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(programs)
}
