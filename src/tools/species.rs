//! Species Identification Tool

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{required_str, Tool, ToolOutput};
use crate::agent::AgentResult;
use crate::knowledge::KnowledgeBase;

pub struct SpeciesIdentificationTool {
    knowledge: KnowledgeBase,
}

impl SpeciesIdentificationTool {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl Tool for SpeciesIdentificationTool {
    fn name(&self) -> String {
        "identify_mangrove_species".to_string()
    }

    fn description(&self) -> String {
        "Identifies a mangrove species and provides information about it: Swahili name, characteristics, uses and conservation status.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "species_name": {
                    "type": "string",
                    "description": "Common, Swahili or scientific name of the mangrove species (partial names allowed)."
                }
            },
            "required": ["species_name"]
        })
    }

    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let species_name = required_str(&params, "species_name")?;
        ToolOutput::from_result(self.knowledge.identify_species(species_name))
    }
}
