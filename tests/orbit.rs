use approx::{assert_abs_diff_eq, assert_relative_eq};
use neo_sentinel::orbits::sample_track;
use neo_sentinel::{
    AsteroidObservation, DEFAULT_ORBIT_SEGMENTS, compute_orbit_points, estimate_orbit,
    position_at_time,
};
use proptest::prelude::*;

fn apophis() -> AsteroidObservation {
    AsteroidObservation {
        miss_distance_km: Some(38_017.0),
        relative_velocity_km_s: Some(7.42),
        is_potentially_hazardous: true,
        ..AsteroidObservation::new("2099942")
    }
}

#[test]
fn apophis_elements_match_reference_values() {
    let elements = estimate_orbit(&apophis());
    assert_relative_eq!(elements.eccentricity, 0.273_666_666_666_666_7, epsilon = 1e-12);
    assert_relative_eq!(elements.semi_major_axis, 5.535_585_130_793_943, epsilon = 1e-12);
    assert_relative_eq!(elements.inclination_deg, 25.216_072_421_884_03, epsilon = 1e-9);
    assert_relative_eq!(elements.ascending_node_deg, 20.925_215_237_287_25, epsilon = 1e-9);
    assert_relative_eq!(elements.arg_periapsis_deg, 313.723_326_962_116_9, epsilon = 1e-9);
    assert_relative_eq!(elements.period_hours, 17.071_170_261_587_888, epsilon = 1e-12);
}

#[test]
fn distant_flyby_has_a_wide_orbit() {
    let observation = AsteroidObservation {
        miss_distance_km: Some(4_213_762.8),
        relative_velocity_km_s: Some(17.31),
        ..AsteroidObservation::new("3542519")
    };
    let elements = estimate_orbit(&observation);
    assert_relative_eq!(elements.eccentricity, 0.4385, epsilon = 1e-12);
    assert_relative_eq!(elements.semi_major_axis, 304.631_365_983_971_5, epsilon = 1e-9);
    assert_relative_eq!(elements.inclination_deg, 37.969_218_307_292_42, epsilon = 1e-9);
}

#[test]
fn default_path_closes_on_itself() {
    let elements = estimate_orbit(&apophis());
    let points = compute_orbit_points(&elements, DEFAULT_ORBIT_SEGMENTS);
    assert_eq!(points.len(), DEFAULT_ORBIT_SEGMENTS + 1);
    assert_eq!(points[0], points[DEFAULT_ORBIT_SEGMENTS]);
}

#[test]
fn epoch_position_is_the_periapsis() {
    let elements = estimate_orbit(&apophis());
    let at_epoch = position_at_time(&elements, 0.0);
    let path_start = compute_orbit_points(&elements, 64)[0];
    for axis in 0..3 {
        assert_abs_diff_eq!(at_epoch[axis], path_start[axis], epsilon = 1e-12);
    }
    let r = at_epoch.iter().map(|v| v * v).sum::<f64>().sqrt();
    assert_relative_eq!(r, elements.periapsis_distance(), epsilon = 1e-12);
}

#[test]
fn one_period_later_the_object_is_back() {
    let elements = estimate_orbit(&apophis());
    let start = position_at_time(&elements, 3.0);
    let later = position_at_time(&elements, 3.0 + elements.period_hours);
    for axis in 0..3 {
        assert_abs_diff_eq!(start[axis], later[axis], epsilon = 1e-9);
    }
}

#[test]
fn track_spans_the_playback_window() {
    let elements = estimate_orbit(&apophis());
    let track = sample_track(&elements, -168.0, 168.0, 1.0);
    assert_eq!(track.len(), 337);
    assert_eq!(track[0].hours, -168.0);
    assert_eq!(track[336].hours, 168.0);
    assert_eq!(track[168].position, position_at_time(&elements, 0.0));
}

proptest! {
    #[test]
    fn positions_stay_on_the_sampled_ellipse(
        miss_km in 1.0f64..5.0e7,
        velocity in 0.1f64..60.0,
        hours in -500.0f64..500.0,
        id in "[0-9]{1,8}",
    ) {
        let observation = AsteroidObservation {
            miss_distance_km: Some(miss_km),
            relative_velocity_km_s: Some(velocity),
            ..AsteroidObservation::new(id)
        };
        let elements = estimate_orbit(&observation);
        prop_assert!((0.15..=0.85).contains(&elements.eccentricity));
        prop_assert!(elements.semi_major_axis > 0.0);

        let point = position_at_time(&elements, hours);
        let (residual, out_of_plane) = elements.ellipse_residual(&point);
        prop_assert!(residual.abs() < 1e-9, "residual {residual}");
        prop_assert!(out_of_plane.abs() < 1e-9 * elements.semi_major_axis);
    }
}
