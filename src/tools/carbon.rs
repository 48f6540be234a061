//! Carbon Storage Tool

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{area_arg, optional_str, Tool, ToolOutput};
use crate::agent::AgentResult;
use crate::knowledge::estimate_carbon_storage;

pub struct CarbonStorageTool;

impl CarbonStorageTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CarbonStorageTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CarbonStorageTool {
    fn name(&self) -> String {
        "calculate_carbon_storage".to_string()
    }

    fn description(&self) -> String {
        "Estimates the carbon stored by a mangrove forest area, its CO2 equivalent, and a nominal carbon credit value in USD.".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area": {
                    "type": "number",
                    "description": "Area of mangrove forest in hectares."
                },
                "forest_age": {
                    "type": "string",
                    "enum": ["young", "middle-aged", "mature"],
                    "default": "mature",
                    "description": "Age classification of the forest."
                }
            },
            "required": ["area"]
        })
    }

    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let area = area_arg(&params, "area");
        let forest_age = optional_str(&params, "forest_age").unwrap_or("mature");
        ToolOutput::from_result(estimate_carbon_storage(area, forest_age))
    }
}
