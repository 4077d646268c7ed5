//! User settings stored as JSON, by default in `~/.soutk/config.json`.
//!
//! A missing file means defaults. Unknown keys are ignored so older
//! binaries can read newer files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PROGRAMS_DIR, DEFAULT_PROMPT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// REPL prompt.
    pub prompt: String,
    /// Print the banner when the REPL starts.
    pub show_banner: bool,
    /// Directory listed by `soutk examples`.
    pub programs_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            programs_dir: PathBuf::from(DEFAULT_PROGRAMS_DIR),
        }
    }
}

impl Settings {
    /// Load from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Write to `path` as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> (PathBuf, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        (path, dir)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (path, _dir) = temp_path();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.prompt, "soutk> ");
        assert!(settings.show_banner);
        assert_eq!(settings.programs_dir, PathBuf::from("examples"));
    }

    #[test]
    fn save_then_load() {
        let (path, _dir) = temp_path();
        let settings = Settings {
            prompt: "stk> ".to_string(),
            show_banner: false,
            programs_dir: PathBuf::from("/srv/programs"),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        Settings::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let (path, _dir) = temp_path();
        fs::write(&path, r#"{ "show_banner": false, "theme": "dark" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.show_banner);
        assert_eq!(settings.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (path, _dir) = temp_path();
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid settings"));
    }
}
