//! Application configuration.
//!
//! Read from `~/.config/persona-reflect/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ReflectError, Result};

/// Directory name under `~/.config`.
pub const CONFIG_DIR_NAME: &str = "persona-reflect";

/// Which response generator to use.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BackendKind {
    /// Fixed template responses after a simulated delay
    #[default]
    Template,
    /// Google Gemini REST API
    Gemini,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    pub backend: BackendKind,
    /// Simulated latency of the template backend, in milliseconds
    pub latency_ms: u64,
    /// Upper bound for one real backend generation, in seconds
    pub timeout_secs: u64,
    /// Model name for the Gemini backend
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Template,
            latency_ms: 2000,
            timeout_secs: 30,
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl GenerationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct JournalConfig {
    /// Start with the sample entries in the store
    pub seed_samples: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { seed_samples: true }
    }
}

/// Root configuration structure for config.toml
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReflectConfig {
    pub generation: GenerationConfig,
    pub journal: JournalConfig,
}

impl ReflectConfig {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from `path`, using defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ReflectError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Returns the configuration directory: ~/.config/persona-reflect
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ReflectError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReflectConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ReflectConfig::default());
        assert_eq!(config.generation.latency(), Duration::from_secs(2));
        assert!(config.journal.seed_samples);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[generation]\nbackend = \"gemini\"\nlatency_ms = 10\n\n[journal]\nseed_samples = false\n",
        )
        .unwrap();

        let config = ReflectConfig::load_from(&path).unwrap();
        assert_eq!(config.generation.backend, BackendKind::Gemini);
        assert_eq!(config.generation.latency_ms, 10);
        assert_eq!(config.generation.timeout_secs, 30);
        assert_eq!(config.generation.model, "gemini-2.5-flash");
        assert!(!config.journal.seed_samples);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generation\nbackend = ").unwrap();
        let err = ReflectConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ReflectError::Config(_)));
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(BackendKind::from_str("Gemini").unwrap(), BackendKind::Gemini);
        assert_eq!(BackendKind::from_str("TEMPLATE").unwrap(), BackendKind::Template);
        assert!(BackendKind::from_str("openai").is_err());
        assert_eq!(BackendKind::Gemini.to_string(), "gemini");
    }
}
