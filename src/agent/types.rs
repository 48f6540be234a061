use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while dispatching tools or talking to a model backend.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = std::result::Result<T, AgentError>;

/// Sampling parameters shared by the agent and the general-question tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_output_tokens: 250,
        }
    }
}

pub const AGENT_NAME: &str = "mikoko_guardian";

pub const AGENT_DESCRIPTION: &str = "Agent supporting mangrove conservation and restoration in coastal Kenya. \
Provides information on mangrove species, restoration planning, and carbon benefits. \
Provides answers to general questions about mangroves, forests, and carbon credits. \
Supports conservation efforts and community engagement and promotes sustainable practices to support the conservation of mangrove trees.";

pub const AGENT_INSTRUCTION: &str = "You are Mikoko Guardian, an assistant for mangrove conservation in the coastal region of Kenya.
You can:
    1. Identify mangrove species, provide information about mangrove sites.
    2. Calculate carbon storage benefits, and help plan restoration projects.
    3. Answer anything about Kenya's mangroves and general questions around mangroves and carbon credits and environmental conservation!
Only answer questions related to mangroves, forests, carbon credits, carbon sinks and environmental conservation efforts focused on the coastal region of Kenya.
You can handle tasks sequentially if needed.";

/// Static definition of the agent handed to the hosted runtime.
#[derive(Debug, Clone, Serialize)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub generation: GenerationConfig,
}

impl AgentConfig {
    pub fn new(model: impl Into<String>, generation: GenerationConfig) -> Self {
        Self {
            name: AGENT_NAME.to_string(),
            model: model.into(),
            description: AGENT_DESCRIPTION.to_string(),
            instruction: AGENT_INSTRUCTION.to_string(),
            generation,
        }
    }
}
