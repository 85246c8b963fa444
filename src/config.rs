//! Configuration parsing and management.
//!
//! Configuration lives in a TOML file (default
//! `~/.config/gitout/config.toml`, overridable via `GITOUT_CONFIG_PATH`).
//! A default file is written on first use so users have something to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Git binary location and CLI defaults.
    #[serde(default)]
    pub git: GitConfig,

    /// Fetch defaults.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Settings for locating the git binary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GitConfig {
    /// Explicit path to the git executable. When unset, `git` is resolved
    /// from `PATH`.
    #[serde(default)]
    pub binary: Option<PathBuf>,
}

/// Fetch defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whether fetch prunes deleted remote branches by default.
    #[serde(default = "default_prune")]
    pub prune: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            prune: default_prune(),
        }
    }
}

/// Default prune behavior.
const fn default_prune() -> bool {
    true
}

impl Config {
    /// Resolves the configuration file path: `GITOUT_CONFIG_PATH` when set,
    /// otherwise `~/.config/gitout/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("GITOUT_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(crate::DEFAULT_CONFIG_PATH))
    }

    /// Loads the configuration from `path`, creating a default file if it
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or created.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to `path`, creating parent directories as
    /// needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.fetch.prune);
        assert!(config.git.binary.is_none());
    }

    #[test]
    fn test_load_creates_default_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("nested/config.toml");

        let config = Config::load(&path)?;
        assert!(path.exists());
        assert!(config.fetch.prune);

        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");

        let mut config = Config::default();
        config.git.binary = Some(PathBuf::from("/opt/git/bin/git"));
        config.fetch.prune = false;
        config.save(&path)?;

        let loaded = Config::load(&path)?;
        assert_eq!(loaded.git.binary, Some(PathBuf::from("/opt/git/bin/git")));
        assert!(!loaded.fetch.prune);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[git]\nbinary = \"/usr/bin/git\"\n")?;

        let config = Config::load(&path)?;
        assert_eq!(config.git.binary, Some(PathBuf::from("/usr/bin/git")));
        assert!(config.fetch.prune);

        Ok(())
    }
}
