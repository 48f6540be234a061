//! Field Report
//!
//! Walks every site in the knowledge base and prints its species, carbon
//! stock and a one-hectare restoration estimate. Asks the model one general
//! question when an API key (or Ollama) is configured.

use anyhow::Result;
use serde_json::json;

use mikoko_guardian::agent::{create_provider, MikokoGuardian};
use mikoko_guardian::config::{GuardianConfig, ProviderKind};
use mikoko_guardian::knowledge::KnowledgeBase;
use mikoko_guardian::utils::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = GuardianConfig::from_env()?;
    let _telemetry = init_telemetry("field_report", &config.log_dir)?;

    let guardian = MikokoGuardian::new(&config, create_provider(&config)).await;
    let tools = guardian.tools();
    let knowledge = KnowledgeBase::kenya_coast();

    println!("\n{}", "═".repeat(60));
    println!("🌿 MIKOKO GUARDIAN: COASTAL FIELD REPORT");
    println!("{}", "═".repeat(60));

    for site in knowledge.sites() {
        let info = tools
            .invoke("get_site_information", json!({ "location": site.location_name }))
            .await;
        let Some(report) = info.report() else {
            println!("\n❌ {}: {}", site.location_name, info.error_message().unwrap_or("unknown error"));
            continue;
        };

        println!(
            "\n📍 {} ({} County)",
            report["location"].as_str().unwrap_or_default(),
            report["county"].as_str().unwrap_or_default()
        );
        println!("   Area: {} ha", site.area_hectares);

        if let Some(species) = report["dominant_species"].as_array() {
            for s in species {
                println!(
                    "   - {:<24} ({})",
                    s["name"].as_str().unwrap_or_default(),
                    s["swahili_name"].as_str().unwrap_or_default()
                );
            }
        }

        let carbon = tools
            .invoke("calculate_carbon_storage", json!({ "area": site.area_hectares }))
            .await;
        if let Some(c) = carbon.report() {
            println!(
                "   Carbon: {:.0} t C, {:.0} t CO2e, ~${:.0} in credits",
                c["total_carbon_tons"].as_f64().unwrap_or_default(),
                c["co2_equivalent_tons"].as_f64().unwrap_or_default(),
                c["potential_carbon_credit_value_usd"].as_f64().unwrap_or_default()
            );
        }

        let plan = tools
            .invoke("plan_restoration", json!({ "area_hectares": 1, "location": site.location_name }))
            .await;
        if let Some(p) = plan.report() {
            println!(
                "   Restoring 1 ha: KES {:.0} (~${:.0}) over {} months",
                p["estimated_cost_kes"].as_f64().unwrap_or_default(),
                p["estimated_cost_usd"].as_f64().unwrap_or_default(),
                p["estimated_timeline_months"]
            );
            if let Some(notes) = p["special_considerations"].as_array() {
                for note in notes {
                    println!("   ⚠️  {}", note.as_str().unwrap_or_default());
                }
            }
        }
    }

    let model_available = config.api_key.is_some() || config.provider == ProviderKind::Ollama;
    if model_available {
        println!("\n💬 GENERAL QUESTION:");
        let answer = tools
            .invoke(
                "answer_general_question",
                json!({ "question": "Why are mangroves important blue carbon sinks?" }),
            )
            .await;
        match answer.report() {
            Some(r) => println!("   {}", r["answer"].as_str().unwrap_or_default()),
            None => println!("   ❌ {}", answer.error_message().unwrap_or("unknown error")),
        }
    } else {
        println!("\n💬 Skipping general question (no model configured).");
    }

    println!("\n{}", "═".repeat(60));
    println!("✅ FIELD REPORT COMPLETE");
    println!("{}", "═".repeat(60));

    Ok(())
}
