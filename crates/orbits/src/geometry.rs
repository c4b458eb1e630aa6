//! Closed polyline sampling of an orbit.

use std::f64::consts::TAU;

use crate::Point3;
use crate::elements::OrbitalElements;

/// Segment count used by renderers when none is given.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 256;

/// Sample the orbit ellipse into `segments + 1` scene points.
///
/// The angle parameter steps evenly from 0 to 2π; the last point repeats the
/// first so the loop closes exactly. A segment count of zero is treated as one.
pub fn compute_orbit_points(elements: &OrbitalElements, segments: usize) -> Vec<Point3> {
    let segments = segments.max(1);
    let orientation = elements.orientation();
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = (i as f64 / segments as f64) * TAU;
        points.push(orientation.apply(&elements.local_point(theta)));
    }
    points.push(points[0]);
    points
}
