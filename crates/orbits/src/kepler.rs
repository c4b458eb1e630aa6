//! Time propagation along a synthetic orbit via Kepler's equation.

use std::f64::consts::TAU;

use tracing::warn;

use crate::Point3;
use crate::elements::OrbitalElements;

/// Newton-Raphson iterations spent on Kepler's equation.
///
/// Fixed count with no tolerance check: cost is bounded and results are
/// bit-stable. Ten steps are enough for eccentricities up to 0.85.
pub const KEPLER_ITERATIONS: usize = 10;

/// Upper bound on the number of samples [`sample_track`] returns.
pub const MAX_TRACK_SAMPLES: usize = 100_000;

/// Mean anomaly in `[0, 2π)` after `hours_offset` hours. Negative offsets travel
/// backwards along the orbit.
pub fn mean_anomaly(hours_offset: f64, period_hours: f64) -> f64 {
    ((hours_offset / period_hours) * TAU).rem_euclid(TAU)
}

/// Solve `M = E − e·sin(E)` for the eccentric anomaly, starting from `E₀ = M`.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anomaly = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let f = e_anomaly - eccentricity * e_anomaly.sin() - mean_anomaly;
        let fp = 1.0 - eccentricity * e_anomaly.cos();
        e_anomaly -= f / fp;
    }
    e_anomaly
}

/// True anomaly from the eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    )
}

/// Scene position of the body `hours_offset` hours from now.
///
/// The true anomaly is fed through the same ellipse parametrisation and
/// orientation as [`crate::compute_orbit_points`], so the result lies on the
/// sampled path for every offset.
pub fn position_at_time(elements: &OrbitalElements, hours_offset: f64) -> Point3 {
    let m = mean_anomaly(hours_offset, elements.period_hours);
    let e_anomaly = solve_eccentric_anomaly(m, elements.eccentricity);
    let nu = true_anomaly(e_anomaly, elements.eccentricity);
    elements.scene_point(nu)
}

/// Position sampled at a given time offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub hours: f64,
    pub position: Point3,
}

/// Sample positions from `start_hours` to `end_hours` inclusive every `step_hours`.
///
/// A non-positive or non-finite step, or an empty window, yields the start
/// sample only. A step so fine that the window would need more than
/// [`MAX_TRACK_SAMPLES`] samples is widened to fit.
pub fn sample_track(
    elements: &OrbitalElements,
    start_hours: f64,
    end_hours: f64,
    step_hours: f64,
) -> Vec<TrackSample> {
    let span = end_hours - start_hours;
    let mut step = step_hours;
    let steps = if step.is_finite() && step > 0.0 && span.is_finite() && span > 0.0 {
        let max_steps = (MAX_TRACK_SAMPLES - 1) as f64;
        if span / step > max_steps {
            let widened = span / max_steps;
            warn!(
                requested = step_hours,
                step = widened,
                "track step too fine, widening to {MAX_TRACK_SAMPLES} samples"
            );
            step = widened;
        }
        // Small slack so an end landing on a step boundary survives rounding.
        ((span / step + 1e-9).floor() as usize).min(MAX_TRACK_SAMPLES - 1)
    } else {
        0
    };
    (0..=steps)
        .map(|i| {
            let hours = start_hours + i as f64 * step.max(0.0);
            TrackSample {
                hours,
                position: position_at_time(elements, hours),
            }
        })
        .collect()
}
