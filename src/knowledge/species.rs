//! Mangrove species of the Kenyan coast.

use serde::Serialize;

use super::display_case;

/// One species entry. `scientific_name` is the lowercase table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesRecord {
    pub scientific_name: &'static str,
    pub local_name: &'static str,
    pub characteristics: &'static str,
    pub uses: &'static str,
    pub conservation_status: &'static str,
}

pub static KENYA_MANGROVE_SPECIES: &[SpeciesRecord] = &[
    SpeciesRecord {
        scientific_name: "rhizophora mucronata",
        local_name: "Mkoko",
        characteristics: "Distinctive prop roots, elongated propagules",
        uses: "Timber, firewood, boat building",
        conservation_status: "Vulnerable in many areas",
    },
    SpeciesRecord {
        scientific_name: "avicennia marina",
        local_name: "Mchu",
        characteristics: "Grey-green leaves, pencil-like pneumatophores",
        uses: "Medicinal purposes, honey production",
        conservation_status: "Relatively stable",
    },
    SpeciesRecord {
        scientific_name: "sonneratia alba",
        local_name: "Mlilana",
        characteristics: "White flowers, round fruits, conical pneumatophores",
        uses: "Fruits are edible, wood for construction",
        conservation_status: "Declining in some areas",
    },
    SpeciesRecord {
        scientific_name: "ceriops tagal",
        local_name: "Mkandaa",
        characteristics: "Small tree, club-shaped propagules with ridges",
        uses: "Dye production, poles for construction",
        conservation_status: "Threatened by harvesting",
    },
    SpeciesRecord {
        scientific_name: "bruguiera gymnorrhiza",
        local_name: "Muia",
        characteristics: "Knee-like roots, red flowers, long propagules",
        uses: "Construction, charcoal production",
        conservation_status: "Vulnerable",
    },
];

/// Full species description returned by a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesReport {
    pub species: String,
    #[serde(rename = "swahili_name")]
    pub local_name: &'static str,
    pub characteristics: &'static str,
    pub uses: &'static str,
    pub conservation_status: &'static str,
}

impl From<&SpeciesRecord> for SpeciesReport {
    fn from(record: &SpeciesRecord) -> Self {
        Self {
            species: display_case(record.scientific_name),
            local_name: record.local_name,
            characteristics: record.characteristics,
            uses: record.uses,
            conservation_status: record.conservation_status,
        }
    }
}

/// Short form used when listing the species of a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSummary {
    pub name: String,
    #[serde(rename = "swahili_name")]
    pub local_name: &'static str,
}

impl From<&SpeciesRecord> for SpeciesSummary {
    fn from(record: &SpeciesRecord) -> Self {
        Self {
            name: display_case(record.scientific_name),
            local_name: record.local_name,
        }
    }
}
