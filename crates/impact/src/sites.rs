//! Named impact locations on the scene Earth.

use neo_core::geo;
use neo_core::seeded_random;
use neo_core::vector::Vector3;

/// Latitude band random sites are drawn from (deg).
pub const RANDOM_LATITUDE_LIMIT_DEG: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSite {
    pub name: &'static str,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl ImpactSite {
    /// Ground-zero point on the scene Earth.
    pub fn scene_position(&self) -> Vector3 {
        geo::surface_point(self.latitude_deg, self.longitude_deg)
    }
}

pub const SITES: [ImpactSite; 6] = [
    ImpactSite {
        name: "Atlantic Ocean",
        latitude_deg: 30.0,
        longitude_deg: -40.0,
    },
    ImpactSite {
        name: "Pacific Ocean",
        latitude_deg: -10.0,
        longitude_deg: -160.0,
    },
    ImpactSite {
        name: "Sahara Desert",
        latitude_deg: 23.0,
        longitude_deg: 10.0,
    },
    ImpactSite {
        name: "Siberia",
        latitude_deg: 62.0,
        longitude_deg: 100.0,
    },
    ImpactSite {
        name: "Amazon Rainforest",
        latitude_deg: -3.0,
        longitude_deg: -60.0,
    },
    ImpactSite {
        name: "Antarctica",
        latitude_deg: -80.0,
        longitude_deg: 0.0,
    },
];

/// Look a site up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static ImpactSite> {
    let wanted = name.trim();
    SITES.iter().find(|s| s.name.eq_ignore_ascii_case(wanted))
}

/// Reproducible pseudo-random site within ±70° latitude, seeded by `key`.
pub fn random_site(key: &str) -> ImpactSite {
    ImpactSite {
        name: "Random",
        latitude_deg: seeded_random(key, 0) * 2.0 * RANDOM_LATITUDE_LIMIT_DEG
            - RANDOM_LATITUDE_LIMIT_DEG,
        longitude_deg: seeded_random(key, 1) * 360.0 - 180.0,
    }
}
