//! Site Information Tool

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{required_str, Tool, ToolOutput};
use crate::agent::AgentResult;
use crate::knowledge::KnowledgeBase;

pub struct SiteInformationTool {
    knowledge: KnowledgeBase,
}

impl SiteInformationTool {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl Tool for SiteInformationTool {
    fn name(&self) -> String {
        "get_site_information".to_string()
    }

    fn description(&self) -> String {
        "Provides information about the mangrove forest at a coastal location in Kenya: county, area, dominant species and threats.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Name of the coastal area (e.g. 'Gazi Bay') or its county (e.g. 'Kilifi')."
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let location = required_str(&params, "location")?;
        ToolOutput::from_result(self.knowledge.site_information(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_report_fields() {
        let tool = SiteInformationTool::new(KnowledgeBase::kenya_coast());
        let out = tokio_test::block_on(tool.execute(json!({"location": "Lamu"}))).unwrap();

        let report = out.report().unwrap();
        assert_eq!(report["location"], "Lamu Archipelago");
        assert_eq!(report["county"], "Lamu");
        assert_eq!(report["mangrove_area_hectares"], 34000.0);
        assert_eq!(report["dominant_species"][2]["name"], "Bruguiera Gymnorrhiza");
        assert_eq!(report["dominant_species"][2]["swahili_name"], "Muia");
        assert_eq!(report["threats"][1], "Oil exploration");
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let tool = SiteInformationTool::new(KnowledgeBase::kenya_coast());
        assert!(tokio_test::block_on(tool.execute(json!({"place": "Lamu"}))).is_err());
    }
}
