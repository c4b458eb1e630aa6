//! Visualization-grade orbits for near-Earth objects.
//!
//! Real orbital elements are not available from close-approach data, so
//! [`estimate_orbit`] synthesizes a plausible ellipse around a unit-scale Earth.
//! [`compute_orbit_points`] and [`position_at_time`] share the same focus, axes and
//! orientation, so a propagated position always sits on the sampled path.

pub mod elements;
pub mod geometry;
pub mod kepler;
pub mod playback;
pub mod risk;

#[cfg(test)]
mod proptest_orbits;

pub use elements::{AsteroidObservation, OrbitalElements, estimate_orbit};
pub use geometry::{DEFAULT_ORBIT_SEGMENTS, compute_orbit_points};
pub use kepler::{
    KEPLER_ITERATIONS, MAX_TRACK_SAMPLES, TrackSample, position_at_time, sample_track,
};
pub use playback::{Playback, PlaybackError};
pub use risk::RiskCategory;

/// A point in scene space.
pub type Point3 = neo_core::vector::Vector3;
