//! Catalog models and loaders for NEO Sentinel.
//!
//! A catalog path may be a YAML file holding a list of records, a TOML file
//! holding a single record, or a directory of TOML records (read in path order).

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Close-approach record as published by the upstream feed.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ObservationConfig {
    #[serde(alias = "neo_reference_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "missDistanceKm")]
    pub miss_distance_km: Option<f64>,
    #[serde(default, alias = "relativeVelocityKmS")]
    pub relative_velocity_km_s: Option<f64>,
    #[serde(default, alias = "isPotentiallyHazardous")]
    pub is_potentially_hazardous: bool,
    #[serde(default, alias = "riskCategory")]
    pub risk_category: Option<String>,
}

/// Named impact scenario.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImpactScenarioConfig {
    pub name: String,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
    pub angle_degs: f64,
    #[serde(default)]
    pub latitude_deg: Option<f64>,
    #[serde(default)]
    pub longitude_deg: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Errors that can occur while loading catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("duplicate {kind} '{key}' in catalog")]
    Duplicate { kind: &'static str, key: String },
}

/// Load close-approach observations. Identifiers must be unique.
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<ObservationConfig>, ConfigError> {
    let observations: Vec<ObservationConfig> = load_records(path.as_ref())?;
    ensure_unique("observation", observations.iter().map(|o| o.id.as_str()))?;
    debug!(path = %path.as_ref().display(), count = observations.len(), "loaded observations");
    Ok(observations)
}

/// Load impact scenarios. Names must be unique, ignoring case.
pub fn load_impact_scenarios<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ImpactScenarioConfig>, ConfigError> {
    let scenarios: Vec<ImpactScenarioConfig> = load_records(path.as_ref())?;
    ensure_unique("scenario", scenarios.iter().map(|s| s.name.as_str()))?;
    debug!(path = %path.as_ref().display(), count = scenarios.len(), "loaded impact scenarios");
    Ok(scenarios)
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.to_lowercase()) {
            return Err(ConfigError::Duplicate {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
