//! Knowledge & Estimation
//!
//! Static reference tables for Kenya's coastal mangroves, the lookups that
//! search them, and the carbon / restoration calculators built on top.

mod error;
pub mod carbon;
pub mod restoration;
pub mod sites;
pub mod species;

pub use carbon::{estimate_carbon_storage, CarbonEstimate, ForestAge};
pub use error::{ErrorKind, KnowledgeError, KnowledgeResult};
pub use restoration::{plan_restoration, RestorationPlan};
pub use sites::{SiteRecord, SiteReport, Threat, KENYA_COASTAL_REGIONS};
pub use species::{SpeciesRecord, SpeciesReport, SpeciesSummary, KENYA_MANGROVE_SPECIES};

use tracing::debug;

/// Read-only view over a species table and a site table.
///
/// Both tables live for the whole process and are never mutated, so the view
/// is `Copy` and can be handed to every tool.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    species: &'static [SpeciesRecord],
    sites: &'static [SiteRecord],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::kenya_coast()
    }
}

impl KnowledgeBase {
    pub const fn new(species: &'static [SpeciesRecord], sites: &'static [SiteRecord]) -> Self {
        Self { species, sites }
    }

    /// The built-in tables for the Kenyan coast.
    pub const fn kenya_coast() -> Self {
        Self::new(KENYA_MANGROVE_SPECIES, KENYA_COASTAL_REGIONS)
    }

    pub fn species(&self) -> &'static [SpeciesRecord] {
        self.species
    }

    pub fn sites(&self) -> &'static [SiteRecord] {
        self.sites
    }

    /// Find a species by scientific name (whole or partial) or Swahili name.
    ///
    /// An exact key always wins over a partial match elsewhere in the table.
    pub fn find_species(&self, query: &str) -> Option<&'static SpeciesRecord> {
        let needle = query.to_lowercase();
        let species = self.species;

        species
            .iter()
            .find(|record| record.scientific_name == needle)
            .or_else(|| {
                species.iter().find(|record| {
                    overlaps(record.scientific_name, &needle)
                        || record.local_name.to_lowercase() == needle
                })
            })
    }

    /// Find a site by location name (whole or partial) or by county.
    pub fn find_site(&self, query: &str) -> Option<&'static SiteRecord> {
        let needle = query.to_lowercase();
        let sites = self.sites;

        sites
            .iter()
            .find(|record| record.location_name == needle)
            .or_else(|| {
                sites.iter().find(|record| {
                    overlaps(record.location_name, &needle)
                        || record.administrative_region.to_lowercase() == needle
                })
            })
    }

    pub fn identify_species(&self, query: &str) -> KnowledgeResult<SpeciesReport> {
        let record = self
            .find_species(query)
            .ok_or_else(|| KnowledgeError::SpeciesNotFound(query.to_string()))?;
        debug!("Species query '{}' resolved to '{}'", query, record.scientific_name);
        Ok(SpeciesReport::from(record))
    }

    pub fn site_information(&self, query: &str) -> KnowledgeResult<SiteReport> {
        let record = self
            .find_site(query)
            .ok_or_else(|| KnowledgeError::SiteNotFound(query.to_string()))?;
        debug!("Site query '{}' resolved to '{}'", query, record.location_name);

        Ok(SiteReport {
            location: display_case(record.location_name),
            administrative_region: record.administrative_region,
            mangrove_area_hectares: record.area_hectares,
            dominant_species: self.resolve_species(record.dominant_species),
            threats: record.threats.to_vec(),
        })
    }

    /// Resolve species keys into summaries, in order.
    ///
    /// Keys missing from the species table are skipped, not reported.
    pub fn resolve_species(&self, keys: &[&str]) -> Vec<SpeciesSummary> {
        keys.iter()
            .filter_map(|key| {
                let found = self.species.iter().find(|record| record.scientific_name == *key);
                if found.is_none() {
                    debug!("Skipping unknown species reference '{}'", key);
                }
                found
            })
            .map(SpeciesSummary::from)
            .collect()
    }
}

/// Either string contains the other.
fn overlaps(key: &str, needle: &str) -> bool {
    key.contains(needle) || needle.contains(key)
}

/// Reject anything that is not a finite, strictly positive area.
pub fn validate_area(area: f64) -> KnowledgeResult<f64> {
    if area.is_finite() && area > 0.0 {
        Ok(area)
    } else {
        Err(KnowledgeError::InvalidArea)
    }
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A "word" starts after any non-alphabetic character, so `middle-aged`
/// becomes `Middle-Aged`.
pub fn display_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
