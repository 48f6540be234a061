//! Restoration planning: cost, seedlings, timeline and species mix.

use serde::Serialize;
use tracing::debug;

use super::{display_case, validate_area, KnowledgeBase, KnowledgeError, KnowledgeResult, Threat};

/// Per-hectare base costs in Kenyan shillings.
pub const BASE_COSTS_KES: [(&str, f64); 5] = [
    ("site_preparation", 25_000.0),
    ("seedling_production", 40_000.0),
    ("planting", 35_000.0),
    ("monitoring_first_year", 20_000.0),
    ("community_engagement", 15_000.0),
];

pub const SEEDLINGS_PER_HECTARE: f64 = 2_000.0;
pub const KES_PER_USD: f64 = 130.0;

pub const DEFAULT_TIMELINE_MONTHS: u32 = 24;
pub const TOURISM_TIMELINE_MONTHS: u32 = 30;

/// Extra KES per hectare for pollution mitigation.
pub const POLLUTION_SURCHARGE_KES: f64 = 10_000.0;
/// Extra KES per hectare for upland erosion control.
pub const EROSION_SURCHARGE_KES: f64 = 15_000.0;

pub const GENERIC_PLAN: &str = "Generic plan";

pub const DEFAULT_SPECIES: [&str; 3] = ["Rhizophora mucronata", "Avicennia marina", "Sonneratia alba"];

pub const COMMUNITY_INVOLVEMENT: &str = "Recommended to engage local community members in seedling production, planting, and monitoring to ensure long-term sustainability.";

pub const NEXT_STEPS: [&str; 5] = [
    "1. Conduct detailed site assessment",
    "2. Engage local community stakeholders",
    "3. Secure necessary permits from Kenya Forest Service",
    "4. Establish community nursery for seedling production",
    "5. Implement planting according to lunar calendar (best during spring tides)",
];

const WASTE_MANAGEMENT_NOTE: &str = "Community waste management education essential";
const ECOTOURISM_NOTE: &str = "Ecotourism integration recommended";
const EROSION_CONTROL_NOTE: &str = "Soil erosion control measures required upland";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestorationPlan {
    pub area_hectares: f64,
    pub location: String,
    pub recommended_species: Vec<String>,
    pub seedlings_needed: u64,
    pub estimated_timeline_months: u32,
    pub estimated_cost_kes: f64,
    pub estimated_cost_usd: f64,
    pub special_considerations: Vec<String>,
    pub community_involvement: &'static str,
    pub next_steps: Vec<&'static str>,
}

/// Sum of the per-hectare base costs.
pub fn base_cost_per_hectare() -> f64 {
    BASE_COSTS_KES.iter().map(|(_, cost)| cost).sum()
}

/// Build a restoration plan for `area_hectares`, tailored to `location` when
/// it names a known site.
///
/// Unknown or blank locations fall back to the generic plan.
pub fn plan_restoration(
    kb: &KnowledgeBase,
    area_hectares: f64,
    location: Option<&str>,
) -> KnowledgeResult<RestorationPlan> {
    let area_hectares = validate_area(area_hectares)?;

    let mut total_cost = base_cost_per_hectare() * area_hectares;
    let seedlings_needed = (area_hectares * SEEDLINGS_PER_HECTARE).floor() as u64;

    let mut location_label = GENERIC_PLAN.to_string();
    let mut recommended_species: Vec<String> = DEFAULT_SPECIES.iter().map(|s| s.to_string()).collect();
    let mut timeline_months = DEFAULT_TIMELINE_MONTHS;
    let mut special_considerations = Vec::new();

    let site = location
        .filter(|l| !l.trim().is_empty())
        .and_then(|l| kb.find_site(l));

    if let Some(site) = site {
        debug!("Tailoring restoration plan to '{}'", site.location_name);
        location_label = display_case(site.location_name);
        recommended_species = site.dominant_species.iter().map(|s| display_case(s)).collect();

        if site.has_threat(Threat::UrbanExpansion) || site.has_threat(Threat::Pollution) {
            special_considerations.push(WASTE_MANAGEMENT_NOTE.to_string());
            total_cost += POLLUTION_SURCHARGE_KES * area_hectares;
        }

        if site.has_threat(Threat::TourismDevelopment) {
            special_considerations.push(ECOTOURISM_NOTE.to_string());
            timeline_months = TOURISM_TIMELINE_MONTHS;
        }

        if site.has_threat(Threat::Sedimentation) {
            special_considerations.push(EROSION_CONTROL_NOTE.to_string());
            total_cost += EROSION_SURCHARGE_KES * area_hectares;
        }
    } else if let Some(requested) = location {
        debug!("No site matches '{}', using the generic plan", requested);
    }

    if !total_cost.is_finite() {
        return Err(KnowledgeError::InvalidArea);
    }

    Ok(RestorationPlan {
        area_hectares,
        location: location_label,
        recommended_species,
        seedlings_needed,
        estimated_timeline_months: timeline_months,
        estimated_cost_kes: total_cost,
        estimated_cost_usd: total_cost / KES_PER_USD,
        special_considerations,
        community_involvement: COMMUNITY_INVOLVEMENT,
        next_steps: NEXT_STEPS.to_vec(),
    })
}
