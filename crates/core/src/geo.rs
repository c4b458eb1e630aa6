//! Geographic coordinates on the scene Earth.

use crate::constants::SCENE_SCALE;
use crate::vector::Vector3;

/// Convert latitude/longitude (degrees) into a point on a sphere of `radius` scene
/// units. +Y points to the north pole and (0°, 0°) lands on +X.
pub fn lat_lng_to_scene(lat_deg: f64, lng_deg: f64, radius: f64) -> Vector3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();
    [
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

/// Surface point on the scene Earth (radius [`SCENE_SCALE`]).
pub fn surface_point(lat_deg: f64, lng_deg: f64) -> Vector3 {
    lat_lng_to_scene(lat_deg, lng_deg, SCENE_SCALE)
}
