//! Reference impactors offered as starting points.

use crate::ImpactParameters;

/// Named impactor with a one-line description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: ImpactParameters,
}

const fn preset(
    name: &'static str,
    description: &'static str,
    diameter_km: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
    angle_degs: f64,
) -> ImpactPreset {
    ImpactPreset {
        name,
        description,
        params: ImpactParameters {
            diameter_km,
            velocity_km_s,
            density_kg_m3,
            angle_degs,
        },
    }
}

/// Presets ordered from smallest to largest.
pub const PRESETS: [ImpactPreset; 6] = [
    preset(
        "Small Meteorite",
        "House-sized rock, burns up mostly in the atmosphere",
        0.01,
        15.0,
        3_500.0,
        45.0,
    ),
    preset(
        "Chelyabinsk-type",
        "Like the 2013 Russian airburst event",
        0.02,
        19.0,
        3_600.0,
        18.0,
    ),
    preset(
        "Tunguska-type",
        "Flattened 2,000 km² of Siberian forest in 1908",
        0.06,
        15.0,
        2_500.0,
        30.0,
    ),
    preset(
        "City Killer",
        "Would devastate a metropolitan area",
        0.15,
        20.0,
        3_000.0,
        45.0,
    ),
    preset(
        "Apophis-sized",
        "370 m, like asteroid 99942 Apophis",
        0.37,
        12.6,
        2_600.0,
        45.0,
    ),
    preset(
        "Chicxulub Impactor",
        "The dinosaur killer, 66 million years ago",
        10.0,
        20.0,
        2_600.0,
        60.0,
    ),
];

/// Look a preset up by name, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Option<&'static ImpactPreset> {
    let wanted = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(wanted))
}

/// Parameters of the default scenario (the "City Killer").
pub fn default_params() -> ImpactParameters {
    PRESETS[3].params
}
