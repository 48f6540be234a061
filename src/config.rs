//! Process-wide configuration, read once from the environment.

use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::agent::{AgentError, AgentResult, GenerationConfig};

pub const DEFAULT_AGENT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_ANSWER_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    Ollama,
}

impl FromStr for ProviderKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            other => Err(AgentError::Config(format!(
                "Unknown provider '{}' (expected 'gemini' or 'ollama')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GuardianConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    /// Model named in the agent definition.
    pub agent_model: String,
    /// Model used by the general-question tool.
    pub answer_model: String,
    pub gemini_base_url: String,
    pub ollama_host: String,
    pub ollama_port: u16,
    pub generation: GenerationConfig,
    pub log_dir: PathBuf,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            agent_model: DEFAULT_AGENT_MODEL.to_string(),
            answer_model: DEFAULT_ANSWER_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            ollama_host: "http://localhost".to_string(),
            ollama_port: 11434,
            generation: GenerationConfig::default(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl GuardianConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> AgentResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset. Unparseable numbers fall back to the
    /// default with a warning; an unknown provider name is an error.
    pub fn from_lookup<F>(lookup: F) -> AgentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let provider = match get("MIKOKO_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => defaults.provider,
        };

        let generation = GenerationConfig {
            temperature: parse_or(
                get("MIKOKO_TEMPERATURE"),
                "MIKOKO_TEMPERATURE",
                defaults.generation.temperature,
            ),
            max_output_tokens: parse_or(
                get("MIKOKO_MAX_OUTPUT_TOKENS"),
                "MIKOKO_MAX_OUTPUT_TOKENS",
                defaults.generation.max_output_tokens,
            ),
        };

        Ok(Self {
            provider,
            api_key: get("GOOGLE_API_KEY").or_else(|| get("GEMINI_API_KEY")),
            agent_model: get("MIKOKO_AGENT_MODEL").unwrap_or(defaults.agent_model),
            answer_model: get("MIKOKO_ANSWER_MODEL").unwrap_or(defaults.answer_model),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            ollama_host: get("OLLAMA_HOST").unwrap_or(defaults.ollama_host),
            ollama_port: parse_or(get("OLLAMA_PORT"), "OLLAMA_PORT", defaults.ollama_port),
            generation,
            log_dir: get("MIKOKO_LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}='{}', using {}", key, value, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AgentResult<GuardianConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GuardianConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.agent_model, "gemini-2.0-flash-exp");
        assert_eq!(config.answer_model, "gemini-2.0-flash");
        assert_eq!(config.generation.temperature, 0.2);
        assert_eq!(config.generation.max_output_tokens, 250);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MIKOKO_PROVIDER", "Ollama"),
            ("OLLAMA_PORT", "11500"),
            ("MIKOKO_ANSWER_MODEL", "llama3.2"),
            ("GEMINI_API_KEY", "secret"),
            ("MIKOKO_MAX_OUTPUT_TOKENS", "512"),
        ])
        .unwrap();
        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.ollama_port, 11500);
        assert_eq!(config.answer_model, "llama3.2");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.generation.max_output_tokens, 512);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("MIKOKO_TEMPERATURE", "warm"), ("OLLAMA_PORT", "")]).unwrap();
        assert_eq!(config.generation.temperature, 0.2);
        assert_eq!(config.ollama_port, 11434);
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        let err = config_from(&[("MIKOKO_PROVIDER", "watson")]).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }
}
