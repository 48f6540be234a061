use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use super::{Agent, AgentConfig, LLMProvider};
use crate::config::GuardianConfig;
use crate::knowledge::KnowledgeBase;
use crate::tools::{
    CarbonStorageTool, GeneralQuestionTool, RestorationPlanTool, SiteInformationTool,
    SpeciesIdentificationTool, ToolOutput, ToolRegistry,
};

/// The mangrove conservation agent: its definition and its five tools.
pub struct MikokoGuardian {
    config: AgentConfig,
    tools: Arc<ToolRegistry>,
}

impl MikokoGuardian {
    pub async fn new(config: &GuardianConfig, provider: Arc<dyn LLMProvider>) -> Self {
        Self::with_knowledge(config, provider, KnowledgeBase::kenya_coast()).await
    }

    pub async fn with_knowledge(
        config: &GuardianConfig,
        provider: Arc<dyn LLMProvider>,
        knowledge: KnowledgeBase,
    ) -> Self {
        let tools = Arc::new(ToolRegistry::new());
        tools.register_instance(SpeciesIdentificationTool::new(knowledge)).await;
        tools.register_instance(SiteInformationTool::new(knowledge)).await;
        tools.register_instance(CarbonStorageTool::new()).await;
        tools.register_instance(RestorationPlanTool::new(knowledge)).await;
        tools
            .register_instance(GeneralQuestionTool::new(provider, config.answer_model.clone()))
            .await;

        let agent_config = AgentConfig::new(config.agent_model.clone(), config.generation);
        info!("Agent '{}' ready on model '{}'", agent_config.name, agent_config.model);

        Self {
            config: agent_config,
            tools,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn tools(&self) -> Arc<ToolRegistry> {
        self.tools.clone()
    }

    /// Everything the hosted runtime needs to host this agent.
    pub async fn manifest(&self) -> Value {
        json!({
            "name": self.config.name,
            "model": self.config.model,
            "description": self.config.description,
            "instruction": self.config.instruction,
            "generate_content_config": {
                "temperature": self.config.generation.temperature,
                "max_output_tokens": self.config.generation.max_output_tokens,
            },
            "tools": self.tools.declarations().await,
        })
    }
}

#[async_trait]
impl Agent for MikokoGuardian {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn system_prompt(&self) -> &str {
        &self.config.instruction
    }

    async fn tool_names(&self) -> Vec<String> {
        self.tools.tool_names().await
    }

    async fn call_tool(&self, tool: &str, params: Value) -> ToolOutput {
        self.tools.invoke(tool, params).await
    }
}
