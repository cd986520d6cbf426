//! GeminiApiGenerator - Direct REST API implementation for Gemini.
//!
//! Each persona is asked concurrently with its own system instruction, then a
//! final call distills the four responses into suggested actions.

use async_trait::async_trait;
use futures::future::try_join_all;
use reflect_core::persona::{PersonaKind, Reflection};
use reflect_core::{ReflectError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::generator::ResponseGenerator;
use crate::personas::{
    action_plan_prompt, dilemma_prompt, parse_numbered_list, persona_instruction, synthesis_prompt,
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_SUGGESTED_ACTIONS: usize = 5;
const MAX_PLAN_STEPS: usize = 7;
const PLAN_FALLBACK_STEP: &str = "Please try creating your action plan again";

const SYNTHESIS_INSTRUCTION: &str = "You are the coordinator of four self-reflection coaches. \
Combine their insights into concrete, empathetic and non-judgmental steps that empower the user.";

/// Response generator that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiApiGenerator {
    /// Creates a new generator with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bounds the whole generation (all persona calls plus synthesis).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Points the generator at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn reflect(&self, dilemma: &str) -> Result<Reflection> {
        let prompt = dilemma_prompt(dilemma);
        let calls = PersonaKind::ALL.map(|kind| {
            let instruction = persona_instruction(kind);
            let prompt = prompt.clone();
            async move {
                let text = self.send_request(&instruction, &prompt).await?;
                tracing::debug!(target: "generation", persona = %kind, chars = text.len(), "persona responded");
                Ok::<_, ReflectError>(text)
            }
        });

        // try_join_all preserves input order, so texts line up with PersonaKind::ALL.
        let mut texts = try_join_all(calls).await?.into_iter();
        let reflection = Reflection::from_fn(|_| texts.next().unwrap_or_default());
        reflection.validate()?;

        let actions = match self
            .send_request(SYNTHESIS_INSTRUCTION, &synthesis_prompt(dilemma, &reflection))
            .await
        {
            Ok(text) => parse_numbered_list(&text, MAX_SUGGESTED_ACTIONS),
            Err(err) => {
                tracing::warn!(target: "generation", "action synthesis failed: {}", err);
                Vec::new()
            }
        };

        Ok(reflection.with_suggested_actions(actions))
    }

    async fn plan(&self, reflection: &Reflection) -> Result<Vec<String>> {
        let text = self
            .send_request(SYNTHESIS_INSTRUCTION, &action_plan_prompt(reflection))
            .await?;
        Ok(plan_steps_from(&text))
    }

    /// Bounds `task` by the configured timeout.
    async fn within_timeout<T>(&self, task: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, task).await {
            Ok(result) => result,
            Err(_) => Err(ReflectError::generation_failed(
                format!("Gemini did not respond within {}s", self.timeout.as_secs()),
                true,
            )),
        }
    }

    async fn send_request(&self, instruction: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
            }),
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                ReflectError::generation_failed(
                    format!("Gemini API request failed: {err}"),
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ReflectError::generation_failed(format!("Failed to parse Gemini response: {err}"), false)
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ResponseGenerator for GeminiApiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, dilemma: &str) -> Result<Reflection> {
        self.within_timeout(self.reflect(dilemma)).await
    }

    async fn draft_plan(&self, reflection: &Reflection) -> Result<Vec<String>> {
        self.within_timeout(self.plan(reflection)).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Turns the numbered plan answer into at most seven steps, never an empty list.
fn plan_steps_from(text: &str) -> Vec<String> {
    let steps = parse_numbered_list(text, MAX_PLAN_STEPS);
    if steps.is_empty() {
        return vec![PLAN_FALLBACK_STEP.to_string()];
    }
    steps
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            ReflectError::generation_failed(
                "Gemini API returned no text in the response candidates",
                true,
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> ReflectError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ReflectError::generation_failed(
        format!("Gemini API returned {}: {}", status.as_u16(), message),
        is_retryable,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_text_response() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"  Breathe.  "}]}}]}"#);
        assert_eq!(extract_text_response(response).unwrap(), "Breathe.");
    }

    #[test]
    fn test_extract_text_response_without_text_fails() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#);
        let err = extract_text_response(response).unwrap_err();
        assert!(err.is_generation_failed());

        let empty = parse(r#"{}"#);
        assert!(extract_text_response(empty).is_err());
    }

    #[test]
    fn test_map_http_error_retryable_statuses() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        assert!(err.is_retryable());
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED: Quota exceeded"));

        let err = map_http_error(StatusCode::UNAUTHORIZED, "bad key".to_string());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn test_request_serialization() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part { text: "hi".into() }],
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part { text: "be kind".into() }],
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["system_instruction"]["parts"][0]["text"], "be kind");
        assert!(json["system_instruction"].get("role").is_none());
    }

    #[test]
    fn test_plan_steps_are_capped_at_seven() {
        let text = (1..=9).map(|i| format!("{i}. step {i}")).collect::<Vec<_>>().join("\n");
        let steps = plan_steps_from(&text);
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[0], "step 1");
        assert_eq!(steps[6], "step 7");
    }

    #[test]
    fn test_plan_without_steps_falls_back() {
        assert_eq!(plan_steps_from("1.\n2. \n\n"), vec![PLAN_FALLBACK_STEP]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_generation_failure() {
        let generator = GeminiApiGenerator::new("key", DEFAULT_GEMINI_MODEL)
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(5));
        let err = generator.generate("taxes").await.unwrap_err();
        assert!(err.is_generation_failed());

        let reflection = Reflection::from_fn(|kind| format!("{kind} advice"));
        let err = generator.draft_plan(&reflection).await.unwrap_err();
        assert!(err.is_generation_failed());
    }
}
