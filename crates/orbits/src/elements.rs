//! Synthetic orbital elements estimated from close-approach observations.

use neo_core::constants::PERIAPSIS_OFFSET_SCENE;
use neo_core::rotation::Rotation3;
use neo_core::seeded_random;
use neo_core::units::km_to_vis_scene;
use tracing::{debug, trace};

use crate::Point3;
use crate::risk::RiskCategory;

/// Miss distance assumed when an observation carries none (km).
pub const DEFAULT_MISS_DISTANCE_KM: f64 = 1_000_000.0;
/// Relative velocity assumed when an observation carries none (km/s).
pub const DEFAULT_RELATIVE_VELOCITY_KM_S: f64 = 15.0;
/// Eccentricity floor, reached at zero relative velocity.
pub const MIN_ECCENTRICITY: f64 = 0.15;
/// Eccentricity ceiling; saturates at 42 km/s.
pub const MAX_ECCENTRICITY: f64 = 0.85;
/// Relative velocity (km/s) adding one unit of eccentricity.
pub const VELOCITY_PER_ECCENTRICITY_KM_S: f64 = 60.0;
/// Base inclination for potentially hazardous objects (deg).
pub const HAZARDOUS_BASE_INCLINATION_DEG: f64 = 5.0;
/// Base inclination for everything else (deg).
pub const BASE_INCLINATION_DEG: f64 = 15.0;
/// Width of the seeded inclination spread (deg).
pub const INCLINATION_SPREAD_DEG: f64 = 25.0;

/// Sparse close-approach data for a single near-Earth object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsteroidObservation {
    /// Reference identifier; seeds the orientation of the synthetic orbit.
    pub id: String,
    pub name: Option<String>,
    pub miss_distance_km: Option<f64>,
    pub relative_velocity_km_s: Option<f64>,
    pub is_potentially_hazardous: bool,
    pub risk_category: Option<RiskCategory>,
}

impl AsteroidObservation {
    /// Observation carrying only an identifier; every measured value defaults.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Miss distance used for estimation. Absent, zero, negative or non-finite
    /// values fall back to [`DEFAULT_MISS_DISTANCE_KM`].
    pub fn effective_miss_distance_km(&self) -> f64 {
        usable(self.miss_distance_km).unwrap_or(DEFAULT_MISS_DISTANCE_KM)
    }

    /// Relative velocity used for estimation, defaulting like
    /// [`Self::effective_miss_distance_km`].
    pub fn effective_relative_velocity_km_s(&self) -> f64 {
        usable(self.relative_velocity_km_s).unwrap_or(DEFAULT_RELATIVE_VELOCITY_KM_S)
    }

    /// Display label: the name when present, the identifier otherwise.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Elliptical orbit in scene units around an Earth-centred focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub arg_periapsis_deg: f64,
    pub period_hours: f64,
}

impl OrbitalElements {
    /// Semi-minor axis `b = a·√(1 − e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Distance from the ellipse centre to the focus, `c = a·e`.
    pub fn focal_offset(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }

    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orientation of the orbital plane: `Rz(Ω) · Rx(i) · Rz(ω)`.
    ///
    /// The matrices are multiplied in exactly this order; geometry sampling and
    /// propagation both go through here so they cannot drift apart.
    pub fn orientation(&self) -> Rotation3 {
        Rotation3::about_z(self.ascending_node_deg.to_radians())
            * Rotation3::about_x(self.inclination_deg.to_radians())
            * Rotation3::about_z(self.arg_periapsis_deg.to_radians())
    }

    /// Point of the ellipse in the orbital plane (focus at the origin) at angle
    /// parameter `angle_rad`.
    pub fn local_point(&self, angle_rad: f64) -> Point3 {
        let (sin, cos) = angle_rad.sin_cos();
        [
            self.semi_major_axis * cos - self.focal_offset(),
            self.semi_minor_axis() * sin,
            0.0,
        ]
    }

    /// Scene-space point at angle parameter `angle_rad`.
    pub fn scene_point(&self, angle_rad: f64) -> Point3 {
        self.orientation().apply(&self.local_point(angle_rad))
    }

    /// Residual of the ellipse equation for a scene point; zero on the orbit.
    ///
    /// Returns `((x + c)/a)² + (y/b)² − 1` after undoing the orientation, and the
    /// out-of-plane component.
    pub fn ellipse_residual(&self, point: &Point3) -> (f64, f64) {
        let local = self.orientation().transpose().apply(point);
        let u = (local[0] + self.focal_offset()) / self.semi_major_axis;
        let v = local[1] / self.semi_minor_axis();
        (u * u + v * v - 1.0, local[2])
    }
}

/// Estimate a plausible elliptical orbit from an observation.
///
/// The miss distance sets the periapsis, the relative velocity sets the
/// eccentricity, and the identifier seeds the orientation. Identical
/// observations give bit-identical elements.
pub fn estimate_orbit(observation: &AsteroidObservation) -> OrbitalElements {
    let miss_km = observation.effective_miss_distance_km();
    let velocity_km_s = observation.effective_relative_velocity_km_s();
    if usable(observation.miss_distance_km).is_none()
        || usable(observation.relative_velocity_km_s).is_none()
    {
        debug!(
            id = %observation.id,
            miss_km,
            velocity_km_s,
            "observation incomplete, using defaults"
        );
    }

    let periapsis = PERIAPSIS_OFFSET_SCENE + km_to_vis_scene(miss_km);
    let eccentricity =
        (MIN_ECCENTRICITY + velocity_km_s / VELOCITY_PER_ECCENTRICITY_KM_S).min(MAX_ECCENTRICITY);
    let semi_major_axis = periapsis / (1.0 - eccentricity);

    let base_inclination = if observation.is_potentially_hazardous {
        HAZARDOUS_BASE_INCLINATION_DEG
    } else {
        BASE_INCLINATION_DEG
    };
    let id = observation.id.as_str();
    let inclination_deg = base_inclination + seeded_random(id, 0) * INCLINATION_SPREAD_DEG;
    let ascending_node_deg = seeded_random(id, 1) * 360.0;
    let arg_periapsis_deg = seeded_random(id, 2) * 360.0;

    // Rough scaling, not Kepler's third law.
    let period_hours = 6.0 + semi_major_axis * 2.0;

    let elements = OrbitalElements {
        semi_major_axis,
        eccentricity,
        inclination_deg,
        ascending_node_deg,
        arg_periapsis_deg,
        period_hours,
    };
    trace!(id, ?elements, "estimated orbit");
    elements
}
