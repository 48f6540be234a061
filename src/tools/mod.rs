//! Tools Module
//!
//! The five mangrove tools, the registry that dispatches them by name, and
//! the result envelope every call returns.

mod carbon;
mod general_question;
mod restoration;
mod site;
mod species;

pub use carbon::CarbonStorageTool;
pub use general_question::{GeneralQuestionTool, build_question_prompt};
pub use restoration::RestorationPlanTool;
pub use site::SiteInformationTool;
pub use species::SpeciesIdentificationTool;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::agent::{AgentError, AgentResult};
use crate::knowledge::KnowledgeResult;

/// Result envelope handed back to the agent runtime.
///
/// Serializes as `{"status": "success", "report": {...}}` or
/// `{"status": "error", "error_message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutput {
    Success { report: Value },
    Error { error_message: String },
}

impl ToolOutput {
    pub fn success(report: Value) -> Self {
        Self::Success { report }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    /// Serialize a domain result into the envelope.
    pub fn from_result<T: Serialize>(result: KnowledgeResult<T>) -> AgentResult<Self> {
        match result {
            Ok(report) => {
                let report = serde_json::to_value(report)
                    .map_err(|e| AgentError::Tool(format!("Failed to serialize report: {}", e)))?;
                Ok(Self::success(report))
            }
            Err(e) => Ok(Self::failure(e.to_string())),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn report(&self) -> Option<&Value> {
        match self {
            Self::Success { report } => Some(report),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_message } => Some(error_message),
        }
    }
}

/// A function the agent runtime can call by name.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> String;

    fn description(&self) -> String;

    /// JSON Schema of the accepted arguments.
    fn parameters(&self) -> Value;

    /// Run the tool. Domain failures come back as [`ToolOutput::Error`];
    /// an `Err` means the arguments could not be read at all.
    async fn execute(&self, params: Value) -> AgentResult<ToolOutput>;

    fn declaration(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters(),
        })
    }
}

/// Read a required string argument.
pub(crate) fn required_str<'a>(params: &'a Value, key: &str) -> AgentResult<&'a str> {
    params[key]
        .as_str()
        .ok_or_else(|| AgentError::Validation(format!("Missing '{}'", key)))
}

/// Read an optional string argument; `null` counts as absent.
pub(crate) fn optional_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params[key].as_str()
}

/// Read an area argument. Anything that is not a JSON number maps to NaN so
/// the calculators reject it with their usual message.
pub(crate) fn area_arg(params: &Value, key: &str) -> f64 {
    params[key].as_f64().unwrap_or(f64::NAN)
}

/// Registry of tools, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<Vec<Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any existing tool of the same name.
    pub async fn register(&self, tool: Arc<dyn Tool>) {
        let name = tool.name();
        let mut tools = self.tools.write().await;
        if let Some(slot) = tools.iter_mut().find(|t| t.name() == name) {
            warn!("Replacing already registered tool '{}'", name);
            *slot = tool;
        } else {
            info!("Registered tool '{}'", name);
            tools.push(tool);
        }
    }

    pub async fn register_instance<T: Tool + 'static>(&self, tool: T) {
        self.register(Arc::new(tool)).await;
    }

    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().await.iter().find(|t| t.name() == name).cloned()
    }

    pub async fn tool_names(&self) -> Vec<String> {
        self.tools.read().await.iter().map(|t| t.name()).collect()
    }

    /// Function declarations for every registered tool.
    pub async fn declarations(&self) -> Vec<Value> {
        self.tools.read().await.iter().map(|t| t.declaration()).collect()
    }

    /// Dispatch a call by tool name. Always yields an envelope.
    pub async fn invoke(&self, name: &str, params: Value) -> ToolOutput {
        let Some(tool) = self.get(name).await else {
            warn!("Call to unknown tool '{}'", name);
            return ToolOutput::failure(AgentError::Tool(format!("Unknown tool: {}", name)).to_string());
        };

        info!("Invoking tool '{}'", name);
        match tool.execute(params).await {
            Ok(output) => {
                if let Some(message) = output.error_message() {
                    info!("Tool '{}' reported an error: {}", name, message);
                }
                output
            }
            Err(e) => {
                warn!("Tool '{}' rejected its arguments: {}", name, e);
                ToolOutput::failure(e.to_string())
            }
        }
    }
}
