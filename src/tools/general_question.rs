//! General Question Tool
//!
//! Free-text fallback that forwards a question to the configured model.
//! Unlike the other tools its output is not reproducible, and any backend
//! failure is folded into the error envelope.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{required_str, Tool, ToolOutput};
use crate::agent::{truncate, AgentResult, LLMProvider};

/// Wrap a question in the conservation-expert preamble.
pub fn build_question_prompt(question: &str) -> String {
    format!(
        "As a mangrove conservation expert, please answer this question:\n\
         {}\n\n\
         Focus on providing accurate, educational information about mangroves, their ecosystems,\n\
         conservation efforts, and carbon benefits. Include scientific facts where relevant.",
        question
    )
}

pub struct GeneralQuestionTool {
    provider: Arc<dyn LLMProvider>,
    model: String,
}

impl GeneralQuestionTool {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Tool for GeneralQuestionTool {
    fn name(&self) -> String {
        "answer_general_question".to_string()
    }

    fn description(&self) -> String {
        "Answers general questions about mangroves, forests, and carbon credits.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The question about mangroves, forests or carbon credits."
                }
            },
            "required": ["question"]
        })
    }

    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let question = required_str(&params, "question")?;
        debug!(
            "Forwarding question to {} ({}): {}",
            self.provider.name(),
            self.model,
            truncate(question, 80)
        );

        match self
            .provider
            .generate(&self.model, build_question_prompt(question), None)
            .await
        {
            Ok(answer) => Ok(ToolOutput::success(json!({
                "question": question,
                "answer": answer,
            }))),
            Err(e) => {
                warn!("General question failed: {:#}", e);
                Ok(ToolOutput::failure(format!("Unable to answer general question: {:#}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question() {
        let prompt = build_question_prompt("Why do mangroves have prop roots?");
        assert!(prompt.starts_with("As a mangrove conservation expert, please answer this question:\n"));
        assert!(prompt.contains("\nWhy do mangroves have prop roots?\n\n"));
        assert!(prompt.ends_with("Include scientific facts where relevant."));
    }
}
