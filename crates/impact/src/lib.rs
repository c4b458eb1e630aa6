//! Order-of-magnitude consequences of a hypothetical asteroid impact.
//!
//! Scaling laws are deliberately simple: kinetic energy from a uniform sphere,
//! crater size from an energy power law, seismic magnitude from a log fit.

pub mod comparison;
pub mod presets;
pub mod sites;

use neo_core::constants::MEGATON_TNT_J;
use neo_core::units::{km_to_m, kms_to_ms};
use serde::Serialize;
use thiserror::Error;
use tracing::{trace, warn};

pub use comparison::ImpactComparison;
pub use presets::{ImpactPreset, PRESETS};
pub use sites::{ImpactSite, SITES};

/// Smallest crater ever reported (km).
pub const MIN_CRATER_DIAMETER_KM: f64 = 0.01;
/// Richter-style ceiling on the seismic estimate.
pub const MAX_EARTHQUAKE_MAGNITUDE: f64 = 10.0;
/// Ejecta plume height ceiling (km).
pub const MAX_EJECTA_HEIGHT_KM: f64 = 100.0;

/// Impactor description supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactParameters {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
    /// Entry angle above the horizon, in (0, 90].
    pub angle_degs: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ImpactError {
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("impact angle must lie in (0, 90] degrees (got {0})")]
    AngleOutOfRange(f64),
}

impl ImpactParameters {
    /// Validated constructor.
    pub fn new(
        diameter_km: f64,
        velocity_km_s: f64,
        density_kg_m3: f64,
        angle_degs: f64,
    ) -> Result<Self, ImpactError> {
        let params = Self {
            diameter_km,
            velocity_km_s,
            density_kg_m3,
            angle_degs,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that every quantity is physical.
    pub fn validate(&self) -> Result<(), ImpactError> {
        for (field, value) in [
            ("diameter_km", self.diameter_km),
            ("velocity_km_s", self.velocity_km_s),
            ("density_kg_m3", self.density_kg_m3),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ImpactError::NonPositive { field, value });
            }
        }
        if !(self.angle_degs > 0.0 && self.angle_degs <= 90.0) {
            return Err(ImpactError::AngleOutOfRange(self.angle_degs));
        }
        Ok(())
    }
}

/// Estimated consequences of an impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactResult {
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    pub earthquake_magnitude: f64,
    pub fireball_radius_km: f64,
    pub ejecta_height_km: f64,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    /// Energy as TNT, e.g. `"12.4 Megatons TNT"`.
    pub tnt_equivalent: String,
    #[serde(rename = "comparison_tier")]
    pub comparison: ImpactComparison,
}

impl ImpactResult {
    /// Narrative sentence for the comparison tier.
    pub fn comparison_text(&self) -> &'static str {
        self.comparison.narrative()
    }
}

/// Estimate impact consequences.
///
/// Total over its inputs: nothing panics, the crater is floored at
/// [`MIN_CRATER_DIAMETER_KM`] and the magnitude capped at
/// [`MAX_EARTHQUAKE_MAGNITUDE`]. Use [`ImpactParameters::validate`] first when
/// inputs are untrusted.
pub fn estimate_impact(params: &ImpactParameters) -> ImpactResult {
    if let Err(err) = params.validate() {
        warn!(%err, ?params, "estimating impact from non-physical parameters");
    }

    let radius_m = km_to_m(params.diameter_km) / 2.0;
    let volume_m3 = 4.0 / 3.0 * std::f64::consts::PI * radius_m.powi(3);
    let mass_kg = volume_m3 * params.density_kg_m3;
    let velocity_m_s = kms_to_ms(params.velocity_km_s);
    let kinetic_energy_j = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    let energy_megatons = kinetic_energy_j / MEGATON_TNT_J;

    let sin_angle = params.angle_degs.to_radians().sin();
    let raw_crater_km = 0.07 * kinetic_energy_j.powf(0.29) * sin_angle.powf(0.33);
    // Ejecta follows the unfloored crater. f64::max drops NaN, so degenerate
    // inputs give no plume and the minimum crater.
    let ejecta_height_km = (raw_crater_km * 2.5).max(0.0).min(MAX_EJECTA_HEIGHT_KM);
    let crater_diameter_km = raw_crater_km.max(MIN_CRATER_DIAMETER_KM);
    let earthquake_magnitude =
        (0.67 * energy_megatons.log10() + 5.87).min(MAX_EARTHQUAKE_MAGNITUDE);
    let fireball_radius_km = energy_megatons.powf(0.4) * 1.2;

    let result = ImpactResult {
        energy_megatons,
        crater_diameter_km,
        earthquake_magnitude,
        fireball_radius_km,
        ejecta_height_km,
        mass_kg,
        kinetic_energy_j,
        tnt_equivalent: tnt_equivalent(energy_megatons),
        comparison: ImpactComparison::for_megatons(energy_megatons),
    };
    trace!(?result, "estimated impact");
    result
}

/// Format an energy in megatons as TNT, switching to gigatons above 1000 Mt.
pub fn tnt_equivalent(energy_megatons: f64) -> String {
    if energy_megatons > 1_000.0 {
        format!("{:.1} Gigatons TNT", energy_megatons / 1_000.0)
    } else {
        format!("{:.1} Megatons TNT", energy_megatons)
    }
}

/// Visual intensity of the explosion effect for an impactor diameter, in [0.5, 3].
pub fn explosion_intensity(diameter_km: f64) -> f64 {
    ((diameter_km * 1_000.0 + 1.0).log10() * 0.8).clamp(0.5, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn params(diameter_km: f64, velocity_km_s: f64, density: f64, angle: f64) -> ImpactParameters {
        ImpactParameters {
            diameter_km,
            velocity_km_s,
            density_kg_m3: density,
            angle_degs: angle,
        }
    }

    #[test]
    fn small_meteorite_figures() {
        let result = estimate_impact(&params(0.01, 15.0, 3_500.0, 45.0));
        assert_relative_eq!(result.mass_kg, 1_832_595.714_594_046, max_relative = 1e-9);
        assert_relative_eq!(result.kinetic_energy_j, 2.061_670_178_918_301_6e14, max_relative = 1e-9);
        assert_relative_eq!(result.energy_megatons, 0.049_275_099_878_544_49, max_relative = 1e-9);
        // Roughly 49 kt: above the Hiroshima tier.
        assert_eq!(result.comparison, ImpactComparison::NuclearWarhead);
        assert_eq!(result.tnt_equivalent, "0.0 Megatons TNT");
    }

    #[test]
    fn chicxulub_is_a_dinosaur_killer() {
        let result = estimate_impact(&params(10.0, 20.0, 2_600.0, 60.0));
        assert!(result.energy_megatons > 1.0e6);
        assert_eq!(result.comparison, ImpactComparison::DinosaurKiller);
        assert_eq!(result.earthquake_magnitude, MAX_EARTHQUAKE_MAGNITUDE);
        assert_eq!(result.ejecta_height_km, MAX_EJECTA_HEIGHT_KM);
        assert_eq!(result.tnt_equivalent, "65074.4 Gigatons TNT");
    }

    #[test]
    fn city_killer_figures() {
        let result = estimate_impact(&params(0.15, 20.0, 3_000.0, 45.0));
        assert_relative_eq!(result.energy_megatons, 253.414_799_375_371_7, max_relative = 1e-9);
        assert_eq!(result.comparison, ImpactComparison::BabyCousin);
        assert_eq!(result.tnt_equivalent, "253.4 Megatons TNT");
        assert_abs_diff_eq!(result.earthquake_magnitude, 7.480_567_422_581_313, epsilon = 1e-9);
        assert_abs_diff_eq!(result.fireball_radius_km, 10.982_824_292_598_204, epsilon = 1e-9);
        assert_relative_eq!(result.crater_diameter_km, 10_539.037_484_675_65, max_relative = 1e-9);
    }

    #[test]
    fn tiny_impactor_is_a_conventional_bomb() {
        let result = estimate_impact(&params(0.001, 11.0, 1_000.0, 1.0e-9));
        assert!(result.energy_megatons < 0.001);
        assert_eq!(result.comparison, ImpactComparison::ConventionalBomb);
    }

    #[test]
    fn grazing_angle_floors_the_crater_but_throws_no_ejecta() {
        let result = estimate_impact(&params(0.15, 20.0, 3_000.0, 0.0));
        assert_eq!(result.crater_diameter_km, MIN_CRATER_DIAMETER_KM);
        assert_eq!(result.ejecta_height_km, 0.0);
    }

    #[test]
    fn small_crater_ejecta_is_not_floored() {
        let result = estimate_impact(&params(0.001, 1.0, 1_000.0, 1e-9));
        let raw = 0.07
            * result.kinetic_energy_j.powf(0.29)
            * 1e-9f64.to_radians().sin().powf(0.33);
        assert!(raw > 0.0 && raw < MIN_CRATER_DIAMETER_KM);
        assert_eq!(result.crater_diameter_km, MIN_CRATER_DIAMETER_KM);
        assert_relative_eq!(result.ejecta_height_km, raw * 2.5, max_relative = 1e-12);
    }

    #[test]
    fn nan_inputs_give_no_plume() {
        let result = estimate_impact(&params(f64::NAN, 20.0, 3_000.0, 45.0));
        assert_eq!(result.crater_diameter_km, MIN_CRATER_DIAMETER_KM);
        assert_eq!(result.ejecta_height_km, 0.0);
    }

    #[test]
    fn result_serializes_tier_by_key() {
        let result = estimate_impact(&params(0.15, 20.0, 3_000.0, 45.0));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["comparison_tier"], result.comparison.key());
        assert_eq!(value["tnt_equivalent"], "253.4 Megatons TNT");
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn gigaton_switch_is_strictly_above_one_thousand() {
        assert_eq!(tnt_equivalent(1_000.0), "1000.0 Megatons TNT");
        assert_eq!(tnt_equivalent(1_500.0), "1.5 Gigatons TNT");
    }

    #[test]
    fn zero_sized_impactor_is_harmless_not_a_panic() {
        let result = estimate_impact(&params(0.0, 20.0, 3_000.0, 45.0));
        assert_eq!(result.energy_megatons, 0.0);
        assert_eq!(result.crater_diameter_km, MIN_CRATER_DIAMETER_KM);
        assert_eq!(result.comparison, ImpactComparison::ConventionalBomb);
        assert!(result.earthquake_magnitude <= MAX_EARTHQUAKE_MAGNITUDE);
    }

    #[test]
    fn validation_rejects_non_physical_inputs() {
        assert_eq!(
            ImpactParameters::new(-1.0, 20.0, 3_000.0, 45.0),
            Err(ImpactError::NonPositive {
                field: "diameter_km",
                value: -1.0
            })
        );
        assert!(matches!(
            ImpactParameters::new(1.0, f64::NAN, 3_000.0, 45.0),
            Err(ImpactError::NonPositive { field: "velocity_km_s", .. })
        ));
        assert_eq!(
            ImpactParameters::new(1.0, 20.0, 3_000.0, 0.0),
            Err(ImpactError::AngleOutOfRange(0.0))
        );
        assert_eq!(
            ImpactParameters::new(1.0, 20.0, 3_000.0, 91.0),
            Err(ImpactError::AngleOutOfRange(91.0))
        );
        assert!(ImpactParameters::new(1.0, 20.0, 3_000.0, 90.0).is_ok());
    }

    #[test]
    fn explosion_intensity_is_clamped() {
        assert_eq!(explosion_intensity(0.0), 0.5);
        assert_eq!(explosion_intensity(10.0), 3.0);
        assert_abs_diff_eq!(explosion_intensity(0.15), (151.0f64).log10() * 0.8, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_crater_floor_and_magnitude_cap(
            diameter in 0.0f64..50.0,
            velocity in 0.0f64..75.0,
            density in 0.0f64..8_000.0,
            angle in 0.0f64..=90.0,
        ) {
            let result = estimate_impact(&params(diameter, velocity, density, angle));
            prop_assert!(result.crater_diameter_km >= MIN_CRATER_DIAMETER_KM);
            prop_assert!(!(result.earthquake_magnitude > MAX_EARTHQUAKE_MAGNITUDE));
            prop_assert!(result.ejecta_height_km <= MAX_EJECTA_HEIGHT_KM);
            prop_assert!(result.ejecta_height_km >= 0.0);
        }
    }
}
