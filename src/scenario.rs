//! Conversion from catalog records into core inputs, and catalog lookups.

use neo_config::{ImpactScenarioConfig, ObservationConfig};
use neo_core::geo;
use neo_core::vector::Vector3;
use neo_impact::{ImpactError, ImpactParameters, ImpactSite, presets, sites};
use neo_orbits::{AsteroidObservation, RiskCategory};
use thiserror::Error;

/// Errors surfaced when selecting or converting catalog entries.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),
    #[error("scenario '{name}' has invalid parameters: {source}")]
    InvalidImpact {
        name: String,
        #[source]
        source: ImpactError,
    },
    #[error("scenario '{0}' gives only one of latitude and longitude")]
    PartialSite(String),
}

/// Convert an observation record into the estimator input.
pub fn observation_from_config(config: &ObservationConfig) -> AsteroidObservation {
    AsteroidObservation {
        id: config.id.clone(),
        name: config.name.clone(),
        miss_distance_km: config.miss_distance_km,
        relative_velocity_km_s: config.relative_velocity_km_s,
        is_potentially_hazardous: config.is_potentially_hazardous,
        risk_category: config.risk_category.as_deref().map(RiskCategory::from_label),
    }
}

/// Select an observation by id or name (case-insensitive), defaulting to the
/// first potentially hazardous entry, then to the first entry.
pub fn select_observation(
    configs: &[ObservationConfig],
    requested: Option<&str>,
) -> Result<AsteroidObservation, ScenarioError> {
    if configs.is_empty() {
        return Err(ScenarioError::EmptyCatalog("observation"));
    }

    let chosen = if let Some(wanted) = requested {
        configs
            .iter()
            .find(|cfg| {
                cfg.id.eq_ignore_ascii_case(wanted)
                    || cfg
                        .name
                        .as_deref()
                        .is_some_and(|name| name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ScenarioError::NotFound {
                kind: "observation",
                name: wanted.to_string(),
            })?
    } else {
        configs
            .iter()
            .find(|cfg| cfg.is_potentially_hazardous)
            .unwrap_or(&configs[0])
    };

    Ok(observation_from_config(chosen))
}

/// Where an impact lands.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundZero {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GroundZero {
    pub fn scene_position(&self) -> Vector3 {
        geo::surface_point(self.latitude_deg, self.longitude_deg)
    }
}

impl From<&ImpactSite> for GroundZero {
    fn from(site: &ImpactSite) -> Self {
        Self {
            name: site.name.to_string(),
            latitude_deg: site.latitude_deg,
            longitude_deg: site.longitude_deg,
        }
    }
}

/// Resolve a named site; `"random"` draws a reproducible site seeded by `seed`.
pub fn resolve_site(name: &str, seed: &str) -> Result<GroundZero, ScenarioError> {
    if name.trim().eq_ignore_ascii_case("random") {
        return Ok(GroundZero::from(&sites::random_site(seed)));
    }
    sites::find(name)
        .map(GroundZero::from)
        .ok_or_else(|| ScenarioError::NotFound {
            kind: "site",
            name: name.to_string(),
        })
}

/// Fully specified impact scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactScenario {
    pub name: String,
    pub description: Option<String>,
    pub params: ImpactParameters,
    pub site: Option<GroundZero>,
}

/// Build a validated scenario from a catalog record.
pub fn impact_from_config(config: &ImpactScenarioConfig) -> Result<ImpactScenario, ScenarioError> {
    let params = ImpactParameters::new(
        config.diameter_km,
        config.velocity_km_s,
        config.density_kg_m3,
        config.angle_degs,
    )
    .map_err(|source| ScenarioError::InvalidImpact {
        name: config.name.clone(),
        source,
    })?;

    let site = match (config.latitude_deg, config.longitude_deg) {
        (Some(latitude_deg), Some(longitude_deg)) => Some(GroundZero {
            name: config.name.clone(),
            latitude_deg,
            longitude_deg,
        }),
        (None, None) => None,
        _ => return Err(ScenarioError::PartialSite(config.name.clone())),
    };

    Ok(ImpactScenario {
        name: config.name.clone(),
        description: config.description.clone(),
        params,
        site,
    })
}

/// Select a catalog scenario by name (case-insensitive), defaulting to the first.
pub fn select_impact(
    configs: &[ImpactScenarioConfig],
    requested: Option<&str>,
) -> Result<ImpactScenario, ScenarioError> {
    let chosen = match requested {
        Some(wanted) => configs
            .iter()
            .find(|cfg| cfg.name.eq_ignore_ascii_case(wanted.trim()))
            .ok_or_else(|| ScenarioError::NotFound {
                kind: "scenario",
                name: wanted.to_string(),
            })?,
        None => configs.first().ok_or(ScenarioError::EmptyCatalog("scenario"))?,
    };
    impact_from_config(chosen)
}

/// Scenario for a built-in preset.
pub fn preset_scenario(name: &str) -> Result<ImpactScenario, ScenarioError> {
    let preset = presets::find(name).ok_or_else(|| ScenarioError::NotFound {
        kind: "preset",
        name: name.to_string(),
    })?;
    Ok(ImpactScenario {
        name: preset.name.to_string(),
        description: Some(preset.description.to_string()),
        params: preset.params,
        site: None,
    })
}
