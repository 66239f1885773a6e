//! Configuration module
//!
//! This module contains the service settings and path management.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{GithubSettings, Settings, StorageBackend};
