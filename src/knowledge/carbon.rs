//! Carbon storage estimates for a mangrove stand.

use serde::Serialize;

use super::{validate_area, KnowledgeError, KnowledgeResult};

/// Tons of CO2 per ton of stored carbon.
pub const CO2_PER_TON_CARBON: f64 = 3.67;

/// Nominal carbon credit price in USD per ton of CO2.
pub const CREDIT_USD_PER_TON_CO2: f64 = 15.0;

pub const CARBON_ESTIMATE_NOTE: &str = "These are estimates based on general studies of Kenyan mangroves. Actual values may vary based on species composition, health, and local conditions.";

/// Age class of a stand, which sets its carbon density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForestAge {
    Young,
    MiddleAged,
    #[default]
    Mature,
}

impl ForestAge {
    /// Parse an age class, case-insensitively. Anything unrecognised is
    /// treated as a mature stand.
    pub fn parse_or_mature(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "young" => Self::Young,
            "middle-aged" => Self::MiddleAged,
            "mature" => Self::Mature,
            _ => Self::Mature,
        }
    }

    /// Stored carbon in tons per hectare.
    pub fn carbon_per_hectare(self) -> u32 {
        match self {
            Self::Young => 143,
            Self::MiddleAged => 297,
            Self::Mature => 392,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::MiddleAged => "middle-aged",
            Self::Mature => "mature",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonEstimate {
    pub area_hectares: f64,
    pub forest_age: ForestAge,
    pub carbon_per_hectare_tons: u32,
    pub total_carbon_tons: f64,
    pub co2_equivalent_tons: f64,
    pub potential_carbon_credit_value_usd: f64,
    pub note: &'static str,
}

/// Estimate stored carbon, its CO2 equivalent, and a nominal credit value.
///
/// Values are the raw products; nothing is rounded.
pub fn estimate_carbon_storage(area_hectares: f64, forest_age: &str) -> KnowledgeResult<CarbonEstimate> {
    let area_hectares = validate_area(area_hectares)?;
    let forest_age = ForestAge::parse_or_mature(forest_age);

    let carbon_per_hectare = forest_age.carbon_per_hectare();
    let total_carbon = area_hectares * f64::from(carbon_per_hectare);
    let co2_equivalent = total_carbon * CO2_PER_TON_CARBON;
    let credit_value = co2_equivalent * CREDIT_USD_PER_TON_CO2;
    if !credit_value.is_finite() {
        return Err(KnowledgeError::InvalidArea);
    }

    Ok(CarbonEstimate {
        area_hectares,
        forest_age,
        carbon_per_hectare_tons: carbon_per_hectare,
        total_carbon_tons: total_carbon,
        co2_equivalent_tons: co2_equivalent,
        potential_carbon_credit_value_usd: credit_value,
        note: CARBON_ESTIMATE_NOTE,
    })
}
