use std::path::Path;

use anyhow::{Context, Result};
use armcloud_config::{load_metadata_file, well_known, MetadataClient};
use armcloud_domain::{CloudEnvironment, WellKnownCloud};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::output;

pub fn list(format: OutputFormat) -> Result<()> {
    let table = well_known().context("Failed to load well-known cloud metadata")?;
    match format {
        OutputFormat::Text => print!("{}", output::render_well_known(table)),
        OutputFormat::Json => print_json(&output::well_known_json(table))?,
    }
    Ok(())
}

pub fn show(cloud: &str, format: OutputFormat) -> Result<()> {
    let cloud: WellKnownCloud = cloud.parse()?;
    let table = well_known().context("Failed to load well-known cloud metadata")?;
    let env = table.get(cloud);
    match format {
        OutputFormat::Text => print!("{}", output::render_environment(env, Some(cloud.as_str()))),
        OutputFormat::Json => print_json(&output::environment_json(env))?,
    }
    Ok(())
}

pub fn parse(file: &Path, format: OutputFormat) -> Result<()> {
    let envs = load_metadata_file(file)?;
    print_environments(&envs, format)
}

pub async fn discover(endpoint: &str, format: OutputFormat) -> Result<()> {
    let envs = MetadataClient::new()
        .fetch(endpoint)
        .await
        .with_context(|| format!("Failed to discover cloud metadata at {endpoint}"))?;
    print_environments(&envs, format)
}

fn print_environments(envs: &[CloudEnvironment], format: OutputFormat) -> Result<()> {
    for env in envs {
        if let Err(e) = env.resource_manager() {
            warn!("{}", e);
        }
    }
    match format {
        OutputFormat::Text => println!("{}", output::render_environments(envs)),
        OutputFormat::Json => {
            let list: Vec<_> = envs.iter().map(output::environment_json).collect();
            print_json(&serde_json::Value::Array(list))?;
        }
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
