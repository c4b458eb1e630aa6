//! Core units, constants, and shared primitives for the NEO Sentinel workspace.

pub mod format;
pub mod geo;
pub mod random;
pub mod rotation;

pub use random::seeded_random;
pub use rotation::Rotation3;

/// Physical and scene constants. SI units unless stated otherwise.
pub mod constants {
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Mean Earth radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Earth radius expressed in scene units.
    pub const SCENE_SCALE: f64 = 2.0;
    /// Scene units per kilometre at true scale.
    pub const KM_TO_SCENE: f64 = SCENE_SCALE / EARTH_RADIUS_KM;
    /// Scene units per astronomical unit at true scale.
    pub const AU_TO_SCENE: f64 = AU_KM * KM_TO_SCENE;
    /// Compression factor applied to close-approach distances so orbits stay
    /// visible around the Earth model.
    pub const VIS_SCALE: f64 = 0.000_04;
    /// Scene-unit offset added to every periapsis; keeps orbits outside the Earth body.
    pub const PERIAPSIS_OFFSET_SCENE: f64 = 2.5;
    /// Joules released by one megaton of TNT.
    pub const MEGATON_TNT_J: f64 = 4.184e15;
}

/// Unit conversions.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert real kilometres into compressed scene units.
    #[inline]
    pub fn km_to_vis_scene(v: f64) -> f64 {
        v * super::constants::VIS_SCALE
    }
}

/// Plain `[f64; 3]` vector arithmetic.
pub mod vector {
    /// Alias for a 3D vector in scene units.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        norm(&sub(a, b))
    }
}
