//! Human-readable formatting for distances, speeds and lengths.

/// Format a distance in kilometres, switching to K/M suffixes for large values.
pub fn format_distance(km: f64) -> String {
    if km >= 1_000_000.0 {
        format!("{:.2}M km", km / 1_000_000.0)
    } else if km >= 1_000.0 {
        format!("{:.1}K km", km / 1_000.0)
    } else {
        format!("{:.0} km", km)
    }
}

/// Format a speed in km/s.
pub fn format_velocity(km_s: f64) -> String {
    format!("{:.2} km/s", km_s)
}

/// Format a length given in kilometres, falling back to metres below 1 km.
pub fn format_length_km(km: f64) -> String {
    if km >= 1.0 {
        format!("{:.1} km", km)
    } else {
        format!("{:.0} m", km * 1_000.0)
    }
}
