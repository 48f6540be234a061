//! Mikoko Guardian command line
//!
//! Thin shell over the agent for local use and for runtimes that shell out:
//!
//!   mikoko_guardian tools                 list tool declarations
//!   mikoko_guardian agent                 print the agent manifest
//!   mikoko_guardian call <tool> [json]    run one tool, print its envelope

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use tracing::info;

use mikoko_guardian::agent::{create_provider, MikokoGuardian};
use mikoko_guardian::config::GuardianConfig;
use mikoko_guardian::utils::telemetry::init_telemetry;

const USAGE: &str = "usage: mikoko_guardian <tools | agent | call <tool> [json-args]>";

enum Command {
    Tools,
    Agent,
    Call { tool: String, params: Value },
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args.first().map(String::as_str) {
        Some("tools") => Ok(Command::Tools),
        Some("agent") => Ok(Command::Agent),
        Some("call") => {
            let tool = args.get(1).ok_or_else(|| anyhow!("missing tool name\n{}", USAGE))?.clone();
            let params = match args.get(2) {
                Some(raw) => serde_json::from_str(raw).context("tool arguments must be a JSON object")?,
                None => Value::Object(Default::default()),
            };
            if !params.is_object() {
                bail!("tool arguments must be a JSON object");
            }
            Ok(Command::Call { tool, params })
        }
        Some(other) => bail!("unknown command '{}'\n{}", other, USAGE),
        None => bail!("{}", USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let config = GuardianConfig::from_env()?;
    let _telemetry = init_telemetry("mikoko_guardian", &config.log_dir)?;

    let provider = create_provider(&config);
    let guardian = MikokoGuardian::new(&config, provider).await;

    let output = match command {
        Command::Tools => Value::Array(guardian.tools().declarations().await),
        Command::Agent => guardian.manifest().await,
        Command::Call { tool, params } => {
            info!("CLI call to '{}'", tool);
            serde_json::to_value(guardian.tools().invoke(&tool, params).await)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_call() {
        match parse_args(&args(&["call", "plan_restoration", r#"{"area_hectares": 2}"#])).unwrap() {
            Command::Call { tool, params } => {
                assert_eq!(tool, "plan_restoration");
                assert_eq!(params["area_hectares"], 2);
            }
            _ => panic!("expected a call"),
        }
    }

    #[test]
    fn test_parse_call_without_arguments() {
        match parse_args(&args(&["call", "get_site_information"])).unwrap() {
            Command::Call { params, .. } => assert!(params.as_object().unwrap().is_empty()),
            _ => panic!("expected a call"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["dance"])).is_err());
        assert!(parse_args(&args(&["call"])).is_err());
        assert!(parse_args(&args(&["call", "x", "[1, 2]"])).is_err());
        assert!(parse_args(&args(&["call", "x", "{not json"])).is_err());
    }
}
