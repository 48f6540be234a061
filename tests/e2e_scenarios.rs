use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

use mikoko_guardian::agent::{Agent, LLMProvider, MikokoGuardian};
use mikoko_guardian::config::GuardianConfig;

/// Records prompts and answers with a canned reply.
struct MockProvider {
    reply: Result<String, String>,
    seen: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockProvider {
    fn answering(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    async fn generate(&self, model: &str, prompt: String, _system: Option<String>) -> Result<String> {
        self.seen.lock().await.push((model.to_string(), prompt));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow!(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[tokio::test]
async fn test_e2e_general_question_is_forwarded_verbatim() {
    let provider = Arc::new(MockProvider::answering("Mangroves trap sediment and store *lots* of carbon."));
    let seen = provider.seen.clone();
    let guardian = MikokoGuardian::new(&GuardianConfig::default(), provider).await;

    let out = guardian
        .call_tool("answer_general_question", json!({"question": "Why protect mangroves?"}))
        .await;

    let report = out.report().expect("success envelope");
    assert_eq!(report["question"], "Why protect mangroves?");
    assert_eq!(report["answer"], "Mangroves trap sediment and store *lots* of carbon.");

    let seen = seen.lock().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "gemini-2.0-flash");
    assert!(seen[0].1.contains("As a mangrove conservation expert"));
    assert!(seen[0].1.contains("Why protect mangroves?"));
}

#[tokio::test]
async fn test_e2e_provider_failure_becomes_error_envelope() {
    let provider = Arc::new(MockProvider::failing("429 Too Many Requests: quota exceeded"));
    let guardian = MikokoGuardian::new(&GuardianConfig::default(), provider).await;

    let out = guardian
        .call_tool("answer_general_question", json!({"question": "How old is Mida Creek?"}))
        .await;

    assert!(!out.is_success());
    assert_eq!(
        out.error_message(),
        Some("Unable to answer general question: 429 Too Many Requests: quota exceeded")
    );
}

#[tokio::test]
async fn test_e2e_answer_model_follows_config() {
    let provider = Arc::new(MockProvider::answering("ok"));
    let seen = provider.seen.clone();
    let config = GuardianConfig {
        answer_model: "llama3.2".to_string(),
        ..GuardianConfig::default()
    };
    let guardian = MikokoGuardian::new(&config, provider).await;

    guardian
        .call_tool("answer_general_question", json!({"question": "What is blue carbon?"}))
        .await;

    assert_eq!(seen.lock().await[0].0, "llama3.2");
}

#[tokio::test]
async fn test_e2e_deterministic_tools_never_touch_the_model() {
    let provider = Arc::new(MockProvider::failing("should not be called"));
    let seen = provider.seen.clone();
    let guardian = MikokoGuardian::new(&GuardianConfig::default(), provider).await;

    let calls = [
        ("identify_mangrove_species", json!({"species_name": "Mkoko"})),
        ("get_site_information", json!({"location": "Vanga"})),
        ("calculate_carbon_storage", json!({"area": 4.5, "forest_age": "young"})),
        ("plan_restoration", json!({"area_hectares": 12, "location": "Lamu Archipelago"})),
    ];
    for (tool, params) in calls {
        let out = guardian.call_tool(tool, params).await;
        assert!(out.is_success(), "{} failed: {:?}", tool, out);
    }

    assert!(seen.lock().await.is_empty());
}
