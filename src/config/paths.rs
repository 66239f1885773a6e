//! Path management
//!
//! Locates the directory holding `settings.json`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Filesystem locations used by the service
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
}

impl Paths {
    /// Resolve the config directory and create it if needed
    ///
    /// An explicit override is used as the config directory itself; otherwise
    /// the platform config directory is used, falling back to `./academy`.
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_dir = match config_override {
            Some(path) => path,
            None => directories::ProjectDirs::from("", "", "academy")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("academy")),
        };

        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory {}", config_dir.display())
        })?;

        Ok(Self { config_dir })
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_creation() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("nested").join("academy");

        let paths = Paths::new(Some(config.clone())).unwrap();

        assert!(paths.config_dir().exists());
        assert_eq!(paths.settings_path(), config.join("settings.json"));
    }
}
