//! Restoration Planning Tool

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{area_arg, optional_str, Tool, ToolOutput};
use crate::agent::AgentResult;
use crate::knowledge::{plan_restoration, KnowledgeBase};

pub struct RestorationPlanTool {
    knowledge: KnowledgeBase,
}

impl RestorationPlanTool {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl Tool for RestorationPlanTool {
    fn name(&self) -> String {
        "plan_restoration".to_string()
    }

    fn description(&self) -> String {
        "Provides a restoration plan for a mangrove area: recommended species, seedlings, timeline and estimated cost in KES and USD, customized for known coastal sites.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area_hectares": {
                    "type": "number",
                    "description": "Area to be restored in hectares."
                },
                "location": {
                    "type": "string",
                    "description": "Optional coastal location for customized recommendations."
                }
            },
            "required": ["area_hectares"]
        })
    }

    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let area = area_arg(&params, "area_hectares");
        let location = optional_str(&params, "location");
        ToolOutput::from_result(plan_restoration(&self.knowledge, area, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanga_plan() {
        let tool = RestorationPlanTool::new(KnowledgeBase::kenya_coast());
        let out = tokio_test::block_on(tool.execute(json!({"area_hectares": 1, "location": "vanga"})))
            .unwrap();

        let report = out.report().unwrap();
        assert_eq!(report["location"], "Vanga");
        assert_eq!(report["seedlings_needed"], 2000);
        assert_eq!(report["estimated_cost_kes"], 145000.0);
        assert_eq!(report["special_considerations"][0], "Community waste management education essential");
        assert_eq!(report["next_steps"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_null_location_is_generic() {
        let tool = RestorationPlanTool::new(KnowledgeBase::kenya_coast());
        let out = tokio_test::block_on(tool.execute(json!({"area_hectares": 3.0, "location": null})))
            .unwrap();
        assert_eq!(out.report().unwrap()["location"], "Generic plan");
    }
}
