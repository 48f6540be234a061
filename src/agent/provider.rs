//! Text Generation Providers
//!
//! Backends that turn a prompt into model text. Gemini is the default; a
//! local Ollama server can stand in when no API key is available.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::models::ModelOptions;
use ollama_rs::Ollama;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use super::GenerationConfig;
use crate::config::{GuardianConfig, ProviderKind};

/// A backend that generates text for a prompt.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn generate(&self, model: &str, prompt: String, system: Option<String>) -> Result<String>;

    /// Short label for logs.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Gemini
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
    status: Option<String>,
}

fn text_content(role: Option<&str>, text: String) -> Content {
    Content {
        role: role.map(str::to_string),
        parts: vec![Part { text: Some(text) }],
    }
}

fn build_request(
    prompt: String,
    system: Option<String>,
    generation: &GenerationConfig,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![text_content(Some("user"), prompt)],
        system_instruction: system.map(|s| text_content(None, s)),
        generation_config: GeminiGenerationConfig {
            temperature: generation.temperature,
            max_output_tokens: generation.max_output_tokens,
        },
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(anyhow!("prompt blocked by the model ({})", reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("model returned no candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(anyhow!("model returned an empty answer (finish reason: {})", reason));
    }
    Ok(text)
}

fn describe_http_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({}): {}", status, code, envelope.error.message),
            None => format!("{}: {}", status, envelope.error.message),
        },
        Err(_) => format!("{}: {}", status, body.trim()),
    }
}

/// Google Gemini over the `generateContent` REST endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    generation: GenerationConfig,
}

impl GeminiProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, generation: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            generation,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn generate(&self, model: &str, prompt: String, system: Option<String>) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GOOGLE_API_KEY is not set"))?;

        let body = build_request(prompt, system, &self.generation);
        debug!("Gemini request to model '{}'", model);

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        let raw = response.text().await.context("Failed to read Gemini response")?;
        if !status.is_success() {
            return Err(anyhow!(describe_http_error(status, &raw)));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).context("Failed to parse Gemini response")?;
        extract_text(parsed)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// ---------------------------------------------------------------------------
// Ollama
// ---------------------------------------------------------------------------

/// A local Ollama server.
pub struct OllamaProvider {
    ollama: Ollama,
    generation: GenerationConfig,
}

impl OllamaProvider {
    pub fn new(ollama: Ollama, generation: GenerationConfig) -> Self {
        Self { ollama, generation }
    }

    fn options(&self) -> ModelOptions {
        let num_predict = i32::try_from(self.generation.max_output_tokens).unwrap_or(i32::MAX);
        ModelOptions::default()
            .temperature(self.generation.temperature)
            .num_predict(num_predict)
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn generate(&self, model: &str, prompt: String, system: Option<String>) -> Result<String> {
        let mut request = GenerationRequest::new(model.to_string(), prompt).options(self.options());
        if let Some(system) = system {
            request = request.system(system);
        }

        let response = self
            .ollama
            .generate(request)
            .await
            .map_err(|e| anyhow!("Ollama generation failed: {}", e))?;
        Ok(response.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Build the provider selected by configuration.
pub fn create_provider(config: &GuardianConfig) -> Arc<dyn LLMProvider> {
    match config.provider {
        ProviderKind::Gemini => {
            info!("Using Gemini provider at {}", config.gemini_base_url);
            Arc::new(GeminiProvider::new(
                config.gemini_base_url.clone(),
                config.api_key.clone(),
                config.generation,
            ))
        }
        ProviderKind::Ollama => {
            info!("Using Ollama provider at {}:{}", config.ollama_host, config.ollama_port);
            let ollama = Ollama::new(config.ollama_host.clone(), config.ollama_port);
            Arc::new(OllamaProvider::new(ollama, config.generation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = build_request(
            "What is a mangrove?".to_string(),
            Some("Be brief".to_string()),
            &GenerationConfig::default(),
        );
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "What is a mangrove?");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Be brief");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 250);
        assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_request_without_system_instruction() {
        let body = build_request("q".to_string(), None, &GenerationConfig::default());
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Mangroves "}, {"text": "store carbon."}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Mangroves store carbon.");
    }

    #[test]
    fn test_extract_text_reports_blocks_and_empties() {
        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert!(extract_text(blocked).unwrap_err().to_string().contains("SAFETY"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();
        assert!(extract_text(empty).unwrap_err().to_string().contains("MAX_TOKENS"));

        let none: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_text(none).is_err());
    }

    #[test]
    fn test_http_error_description() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let text = describe_http_error(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        assert!(text.contains("RESOURCE_EXHAUSTED"));
        assert!(text.contains("Quota exceeded"));

        let plain = describe_http_error(reqwest::StatusCode::BAD_GATEWAY, "upstream down\n");
        assert!(plain.ends_with("upstream down"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let provider = GeminiProvider::new("http://localhost:1", None, GenerationConfig::default());
        let err = provider.generate("gemini-2.0-flash", "hi".to_string(), None).await.unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::new("https://example.test/v1beta/", None, GenerationConfig::default());
        assert_eq!(
            provider.endpoint("gemini-2.0-flash"),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
