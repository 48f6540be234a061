//! Coastal mangrove sites and the pressures they face.

use serde::Serialize;
use std::fmt;

use super::species::SpeciesSummary;

/// Known pressures on a mangrove site.
///
/// Serialized as the human-readable phrase used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Threat {
    #[serde(rename = "Tourism development")]
    TourismDevelopment,
    #[serde(rename = "Wood harvesting")]
    WoodHarvesting,
    #[serde(rename = "Climate change")]
    ClimateChange,
    #[serde(rename = "Overharvesting")]
    Overharvesting,
    #[serde(rename = "Sedimentation")]
    Sedimentation,
    #[serde(rename = "Coastal erosion")]
    CoastalErosion,
    #[serde(rename = "Port development")]
    PortDevelopment,
    #[serde(rename = "Oil exploration")]
    OilExploration,
    #[serde(rename = "Deforestation")]
    Deforestation,
    #[serde(rename = "Border disputes")]
    BorderDisputes,
    #[serde(rename = "Illegal cutting")]
    IllegalCutting,
    #[serde(rename = "Pollution")]
    Pollution,
    #[serde(rename = "Urban expansion")]
    UrbanExpansion,
    #[serde(rename = "Port activities")]
    PortActivities,
}

impl Threat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TourismDevelopment => "Tourism development",
            Self::WoodHarvesting => "Wood harvesting",
            Self::ClimateChange => "Climate change",
            Self::Overharvesting => "Overharvesting",
            Self::Sedimentation => "Sedimentation",
            Self::CoastalErosion => "Coastal erosion",
            Self::PortDevelopment => "Port development",
            Self::OilExploration => "Oil exploration",
            Self::Deforestation => "Deforestation",
            Self::BorderDisputes => "Border disputes",
            Self::IllegalCutting => "Illegal cutting",
            Self::Pollution => "Pollution",
            Self::UrbanExpansion => "Urban expansion",
            Self::PortActivities => "Port activities",
        }
    }
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One site entry. `location_name` is the lowercase table key and
/// `dominant_species` holds keys into the species table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteRecord {
    pub location_name: &'static str,
    pub administrative_region: &'static str,
    pub area_hectares: f64,
    pub dominant_species: &'static [&'static str],
    pub threats: &'static [Threat],
}

impl SiteRecord {
    pub fn has_threat(&self, threat: Threat) -> bool {
        self.threats.contains(&threat)
    }
}

pub static KENYA_COASTAL_REGIONS: &[SiteRecord] = &[
    SiteRecord {
        location_name: "mida creek",
        administrative_region: "Kilifi",
        area_hectares: 1600.0,
        dominant_species: &["rhizophora mucronata", "avicennia marina"],
        threats: &[Threat::TourismDevelopment, Threat::WoodHarvesting, Threat::ClimateChange],
    },
    SiteRecord {
        location_name: "gazi bay",
        administrative_region: "Kwale",
        area_hectares: 615.0,
        dominant_species: &["rhizophora mucronata", "sonneratia alba", "ceriops tagal"],
        threats: &[Threat::Overharvesting, Threat::Sedimentation, Threat::CoastalErosion],
    },
    SiteRecord {
        location_name: "lamu archipelago",
        administrative_region: "Lamu",
        area_hectares: 34000.0,
        dominant_species: &["rhizophora mucronata", "avicennia marina", "bruguiera gymnorrhiza"],
        threats: &[Threat::PortDevelopment, Threat::OilExploration, Threat::Deforestation],
    },
    SiteRecord {
        location_name: "vanga",
        administrative_region: "Kwale",
        area_hectares: 4000.0,
        dominant_species: &["rhizophora mucronata", "avicennia marina"],
        threats: &[Threat::BorderDisputes, Threat::IllegalCutting, Threat::Pollution],
    },
    SiteRecord {
        location_name: "mombasa",
        administrative_region: "Mombasa",
        area_hectares: 1900.0,
        dominant_species: &["avicennia marina", "sonneratia alba"],
        threats: &[Threat::UrbanExpansion, Threat::Pollution, Threat::PortActivities],
    },
];

/// Site description returned by a lookup, with species resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    pub location: String,
    #[serde(rename = "county")]
    pub administrative_region: &'static str,
    pub mangrove_area_hectares: f64,
    pub dominant_species: Vec<SpeciesSummary>,
    pub threats: Vec<Threat>,
}
