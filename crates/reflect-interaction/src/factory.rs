//! Builds the configured response generator.

use reflect_core::Result;
use reflect_core::config::{BackendKind, GenerationConfig};
use std::sync::Arc;

use crate::config::resolve_gemini_config;
use crate::gemini_api_generator::GeminiApiGenerator;
use crate::generator::ResponseGenerator;
use crate::template_generator::TemplateGenerator;

/// Creates the generator selected by `config`.
///
/// # Errors
///
/// Returns `Config` when the Gemini backend is selected but no API key can be
/// found in the environment or secret.json.
pub fn build_generator(config: &GenerationConfig) -> Result<Arc<dyn ResponseGenerator>> {
    match config.backend {
        BackendKind::Template => Ok(Arc::new(TemplateGenerator::new(config.latency()))),
        BackendKind::Gemini => {
            let secret = resolve_gemini_config()?;
            let model = secret.model_name.unwrap_or_else(|| config.model.clone());
            tracing::info!(target: "generation", "using Gemini backend with model {}", model);
            Ok(Arc::new(
                GeminiApiGenerator::new(secret.api_key, model).with_timeout(config.timeout()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_template_backend_is_default() {
        let config = GenerationConfig {
            latency_ms: 5,
            ..GenerationConfig::default()
        };
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.name(), "template");
        assert_eq!(config.latency(), Duration::from_millis(5));
    }
}
