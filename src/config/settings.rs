//! Service settings
//!
//! Stored in settings.json in the config directory. Environment variables
//! override the file for the running process only and are never written back,
//! so a token supplied through the environment does not end up on disk.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::auth::Credential;
use crate::storage::{ContentHost, GithubHost, MemoryHost};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Where documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A GitHub repository through the contents API
    Github,
    /// Process memory; contents are lost on exit
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "github" => Some(StorageBackend::Github),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Github
    }
}

/// GitHub access settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSettings {
    /// Personal access token
    #[serde(default)]
    pub token: Option<String>,

    /// Repository as `owner/name`
    #[serde(default)]
    pub repo: Option<String>,

    /// Branch to read and commit to; the default branch when unset
    #[serde(default)]
    pub branch: Option<String>,

    /// API base URL, for GitHub Enterprise
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            token: None,
            repo: None,
            branch: None,
            api_url: default_api_url(),
        }
    }
}

impl GithubSettings {
    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false);
        set(&self.token) && set(&self.repo)
    }
}

/// Settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageBackend,

    #[serde(default)]
    pub github: GithubSettings,

    /// Secret used to sign session tokens
    #[serde(default)]
    pub session_secret: String,

    /// Login accounts; the built-in accounts are used when empty
    #[serde(default)]
    pub users: Vec<Credential>,
}

impl Settings {
    /// Load settings from file, creating it with defaults if missing
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content =
                std::fs::read_to_string(path).context("Failed to read settings file")?;
            let settings: Settings =
                serde_json::from_str(&content).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    /// Save settings to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Generate and persist a session secret if none is set
    pub fn ensure_session_secret(&mut self, path: &Path) -> Result<()> {
        if self.session_secret.is_empty() {
            self.session_secret = uuid::Uuid::new_v4().to_string();
            self.save(path)?;
        }
        Ok(())
    }

    /// Apply `ACADEMY_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ACADEMY_STORAGE") {
            match StorageBackend::from_str(&value) {
                Some(backend) => self.storage = backend,
                None => bail!("Unknown storage backend in ACADEMY_STORAGE: {}", value),
            }
        }
        if let Some(token) = lookup("ACADEMY_GITHUB_TOKEN") {
            self.github.token = Some(token);
        }
        if let Some(repo) = lookup("ACADEMY_GITHUB_REPO") {
            self.github.repo = Some(repo);
        }
        if let Some(branch) = lookup("ACADEMY_GITHUB_BRANCH") {
            self.github.branch = Some(branch);
        }
        if let Some(url) = lookup("ACADEMY_GITHUB_API_URL") {
            self.github.api_url = url;
        }
        if let Some(secret) = lookup("ACADEMY_SESSION_SECRET") {
            self.session_secret = secret;
        }
        Ok(())
    }

    /// Build the content host for the configured backend
    pub fn content_host(&self) -> Arc<dyn ContentHost> {
        match self.storage {
            StorageBackend::Github => Arc::new(GithubHost::new(&self.github)),
            StorageBackend::Memory => Arc::new(MemoryHost::new()),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}
