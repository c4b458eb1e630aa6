use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use neo_config::load_impact_scenarios;
use neo_export::writer_for_path;
use neo_impact::{ImpactParameters, estimate_impact};
use neo_sentinel::report;
use neo_sentinel::scenario::{ImpactScenario, preset_scenario, resolve_site, select_impact};
use std::path::PathBuf;
use tracing::info;

/// Estimate the consequences of a hypothetical asteroid impact.
#[derive(Parser, Debug)]
#[command(author, version, about = "Asteroid impact consequence estimator")]
struct Cli {
    /// Built-in preset (e.g. "City Killer", "Chicxulub Impactor")
    #[arg(long, conflicts_with = "scenario")]
    preset: Option<String>,

    /// Impact scenario catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long, default_value = "data/impact_scenarios.yaml")]
    catalog: PathBuf,

    /// Scenario name from the catalog
    #[arg(long)]
    scenario: Option<String>,

    /// Impactor diameter in km (overrides the preset or scenario)
    #[arg(long)]
    diameter_km: Option<f64>,

    /// Entry velocity in km/s
    #[arg(long)]
    velocity_km_s: Option<f64>,

    /// Bulk density in kg/m³
    #[arg(long)]
    density_kg_m3: Option<f64>,

    /// Entry angle above the horizon in degrees
    #[arg(long)]
    angle_degs: Option<f64>,

    /// Ground zero: a named site or "random"
    #[arg(long)]
    site: Option<String>,

    /// Write the JSON report (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    neo_sentinel::init_logging();
    let cli = Cli::parse();

    let mut scenario = base_scenario(&cli)?;
    apply_overrides(&mut scenario, &cli)?;
    if let Some(site) = &cli.site {
        scenario.site = Some(resolve_site(site, &scenario.name)?);
    }

    let result = estimate_impact(&scenario.params);
    info!(
        scenario = %scenario.name,
        megatons = result.energy_megatons,
        tier = result.comparison.key(),
        "estimated impact"
    );

    let json_to_stdout = cli.json.as_deref().is_some_and(|p| p.as_os_str() == "-");
    if !json_to_stdout {
        print!("{}", report::summary(&scenario, &result));
    }

    if let Some(path) = &cli.json {
        let generated = Utc::now().to_rfc3339();
        let mut writer = writer_for_path(path)?;
        report::write_json(writer.as_mut(), &scenario, &result, &generated)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn base_scenario(cli: &Cli) -> anyhow::Result<ImpactScenario> {
    if let Some(name) = &cli.scenario {
        let catalog = load_impact_scenarios(&cli.catalog)
            .with_context(|| format!("loading {}", cli.catalog.display()))?;
        return Ok(select_impact(&catalog, Some(name.as_str()))?);
    }
    let preset = cli.preset.as_deref().unwrap_or("City Killer");
    Ok(preset_scenario(preset)?)
}

fn apply_overrides(scenario: &mut ImpactScenario, cli: &Cli) -> anyhow::Result<()> {
    let overridden = [
        cli.diameter_km,
        cli.velocity_km_s,
        cli.density_kg_m3,
        cli.angle_degs,
    ]
    .iter()
    .any(Option::is_some);
    if !overridden {
        return Ok(());
    }

    let base = scenario.params;
    scenario.params = ImpactParameters::new(
        cli.diameter_km.unwrap_or(base.diameter_km),
        cli.velocity_km_s.unwrap_or(base.velocity_km_s),
        cli.density_kg_m3.unwrap_or(base.density_kg_m3),
        cli.angle_degs.unwrap_or(base.angle_degs),
    )
    .map_err(|err| anyhow::anyhow!("invalid impact parameters: {err}"))?;
    if cli.preset.is_none() && cli.scenario.is_none() {
        scenario.name = "Custom".to_string();
        scenario.description = None;
    }
    Ok(())
}
