//! Secret management for model backends.
//!
//! Supports reading secrets from `~/.config/persona-reflect/secret.json`.
//! The `GEMINI_API_KEY` environment variable takes precedence over the file.

use reflect_core::config::config_dir;
use reflect_core::{ReflectError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable checked before secret.json.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Loads the secret configuration file from ~/.config/persona-reflect/secret.json
pub fn load_secret_config() -> Result<SecretConfig> {
    load_secret_config_from(&config_dir()?.join("secret.json"))
}

/// Loads the secret configuration from `path`.
pub fn load_secret_config_from(path: &Path) -> Result<SecretConfig> {
    if !path.exists() {
        return Err(ReflectError::config(format!(
            "Configuration file not found at: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ReflectError::config(format!(
            "Failed to read configuration file at {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ReflectError::config(format!(
            "Failed to parse configuration file at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Resolves the Gemini API key from the environment or secret.json.
pub fn resolve_gemini_config() -> Result<GeminiConfig> {
    if let Ok(api_key) = std::env::var(GEMINI_API_KEY_ENV) {
        if !api_key.trim().is_empty() {
            return Ok(GeminiConfig {
                api_key,
                model_name: None,
            });
        }
    }

    load_secret_config()?
        .gemini
        .ok_or_else(|| ReflectError::config("Gemini configuration not found in secret.json"))
}
