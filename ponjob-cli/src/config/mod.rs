//! Remembered form defaults
//!
//! The generate prompts remember the last-entered technician UID, CLLI,
//! Central Office and PFP between runs, stored as TOML under the user config
//! directory. The pipeline itself never reads this; metadata always reaches
//! it fully formed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "ponjob";
const DEFAULTS_FILE: &str = "defaults.toml";

/// Last-used values offered as prompt defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedDefaults {
    #[serde(default)]
    pub tech: String,
    #[serde(default)]
    pub clli: String,
    #[serde(default)]
    pub co: String,
    #[serde(default)]
    pub pfp: String,
}

impl RememberedDefaults {
    /// Load the stored defaults, or empty defaults when none exist
    pub fn load() -> Result<Self> {
        Self::load_from(&defaults_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&defaults_path()?)
    }

    /// Delete the stored defaults; returns whether anything was removed
    pub fn clear() -> Result<bool> {
        let path = defaults_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize defaults")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn defaults_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine user config directory")?;
    Ok(dir.join(APP_DIR).join(DEFAULTS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defaults.toml");

        let defaults = RememberedDefaults {
            tech: "tk1234".to_string(),
            clli: "DLLSTXAA".to_string(),
            co: "DALLAS".to_string(),
            pfp: "PFP-7".to_string(),
        };
        defaults.save_to(&path).unwrap();

        let loaded = RememberedDefaults::load_from(&path).unwrap();
        assert_eq!(loaded, defaults);
    }

    #[test]
    fn test_load_missing_file_gives_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RememberedDefaults::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, RememberedDefaults::default());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("defaults.toml");
        RememberedDefaults::default().save_to(&path).unwrap();
        assert!(path.exists());
    }
}
