//! Synthetic orbits and impact estimates for near-Earth objects.
//!
//! The numerical core lives in the member crates; this library re-exports it and
//! adds the catalog plumbing shared by the command-line front-ends.

pub mod report;
pub mod scenario;

pub use neo_config as config;
pub use neo_core;
pub use neo_export as export;
pub use neo_impact as impact;
pub use neo_orbits as orbits;

pub use neo_impact::{ImpactComparison, ImpactParameters, ImpactResult, estimate_impact};
pub use neo_orbits::{
    AsteroidObservation, DEFAULT_ORBIT_SEGMENTS, OrbitalElements, Point3, compute_orbit_points,
    estimate_orbit, position_at_time,
};

/// Install the stderr log subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to warnings only. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
