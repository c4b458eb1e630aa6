//! Property-based tests for orbit estimation and propagation.
//!
//! These pin the invariants renderers rely on: bounded eccentricity, bitwise
//! determinism, and agreement between the sampled path and propagated positions.

use proptest::prelude::*;

use crate::elements::{AsteroidObservation, MAX_ECCENTRICITY, MIN_ECCENTRICITY, estimate_orbit};
use crate::geometry::compute_orbit_points;
use crate::kepler::position_at_time;

fn observation_strategy() -> impl Strategy<Value = AsteroidObservation> {
    (
        "[0-9A-Za-z ()-]{0,16}",
        proptest::option::of(prop_oneof![
            -1.0e7f64..8.0e7,
            Just(0.0),
            Just(f64::NAN),
            Just(f64::INFINITY),
        ]),
        proptest::option::of(prop_oneof![-50.0f64..80.0, Just(0.0), Just(f64::NAN)]),
        any::<bool>(),
    )
        .prop_map(|(id, miss, velocity, hazardous)| AsteroidObservation {
            id,
            miss_distance_km: miss,
            relative_velocity_km_s: velocity,
            is_potentially_hazardous: hazardous,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_elements_respect_bounds(obs in observation_strategy()) {
        let elements = estimate_orbit(&obs);
        prop_assert!(elements.eccentricity >= MIN_ECCENTRICITY);
        prop_assert!(elements.eccentricity <= MAX_ECCENTRICITY);
        prop_assert!(elements.semi_major_axis > 0.0 && elements.semi_major_axis.is_finite());
        prop_assert!(elements.period_hours > 0.0 && elements.period_hours.is_finite());
        prop_assert!(elements.periapsis_distance() > 2.0, "periapsis inside the Earth model");
    }

    #[test]
    fn prop_estimation_is_bit_deterministic(obs in observation_strategy()) {
        let first = estimate_orbit(&obs);
        let second = estimate_orbit(&obs.clone());
        prop_assert_eq!(first.semi_major_axis.to_bits(), second.semi_major_axis.to_bits());
        prop_assert_eq!(first.eccentricity.to_bits(), second.eccentricity.to_bits());
        prop_assert_eq!(first.inclination_deg.to_bits(), second.inclination_deg.to_bits());
        prop_assert_eq!(first.ascending_node_deg.to_bits(), second.ascending_node_deg.to_bits());
        prop_assert_eq!(first.arg_periapsis_deg.to_bits(), second.arg_periapsis_deg.to_bits());
        prop_assert_eq!(first.period_hours.to_bits(), second.period_hours.to_bits());
    }

    #[test]
    fn prop_path_is_closed(obs in observation_strategy(), segments in 1usize..512) {
        let elements = estimate_orbit(&obs);
        let points = compute_orbit_points(&elements, segments);
        prop_assert_eq!(points.len(), segments + 1);
        prop_assert_eq!(points[0], points[segments]);
    }

    #[test]
    fn prop_position_lies_on_sampled_ellipse(
        obs in observation_strategy(),
        hours in -1_000.0f64..1_000.0,
    ) {
        let elements = estimate_orbit(&obs);
        let p = position_at_time(&elements, hours);
        let (residual, out_of_plane) = elements.ellipse_residual(&p);
        prop_assert!(residual.abs() < 1e-9, "residual {residual} at t = {hours}");
        prop_assert!(
            out_of_plane.abs() < 1e-9 * elements.semi_major_axis,
            "out of plane by {out_of_plane}"
        );

        let r = neo_core::vector::norm(&p);
        prop_assert!(r >= elements.periapsis_distance() * (1.0 - 1e-12));
        prop_assert!(r <= elements.apoapsis_distance() * (1.0 + 1e-12));
    }
}
