//! Agent Module
//!
//! The Mikoko Guardian agent definition and the text-generation backends it
//! relies on.

mod guardian;
mod provider;
mod types;

pub use guardian::MikokoGuardian;
pub use provider::{create_provider, GeminiProvider, LLMProvider, OllamaProvider};
pub use types::{
    AgentConfig, AgentError, AgentResult, GenerationConfig, AGENT_DESCRIPTION, AGENT_INSTRUCTION, AGENT_NAME,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::ToolOutput;

/// An agent as seen by the hosted runtime: a definition plus callable tools.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn system_prompt(&self) -> &str;

    async fn tool_names(&self) -> Vec<String>;

    /// Call one tool by name with JSON arguments.
    async fn call_tool(&self, tool: &str, params: Value) -> ToolOutput;
}

pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ");
    if s.len() <= max_len {
        s
    } else {
        let target_len = max_len.saturating_sub(3);
        let mut end = target_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
