//! Narrative comparison tiers for impact energies.

use serde::Serialize;

/// Energy tier, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactComparison {
    ConventionalBomb,
    Hiroshima,
    NuclearWarhead,
    TsarBomba,
    BabyCousin,
    RegionalExtinction,
    DinosaurKiller,
    PlanetShattering,
}

/// Exclusive upper bounds (megatons) of every tier but the last.
const TIER_BOUNDS: [(f64, ImpactComparison); 7] = [
    (0.001, ImpactComparison::ConventionalBomb),
    (0.02, ImpactComparison::Hiroshima),
    (1.0, ImpactComparison::NuclearWarhead),
    (100.0, ImpactComparison::TsarBomba),
    (10_000.0, ImpactComparison::BabyCousin),
    (1.0e6, ImpactComparison::RegionalExtinction),
    (1.0e9, ImpactComparison::DinosaurKiller),
];

impl ImpactComparison {
    /// First tier whose upper bound exceeds `megatons`.
    pub fn for_megatons(megatons: f64) -> Self {
        TIER_BOUNDS
            .iter()
            .find(|(bound, _)| megatons < *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(ImpactComparison::PlanetShattering)
    }

    /// Machine-readable tier name, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            ImpactComparison::ConventionalBomb => "conventional_bomb",
            ImpactComparison::Hiroshima => "hiroshima",
            ImpactComparison::NuclearWarhead => "nuclear_warhead",
            ImpactComparison::TsarBomba => "tsar_bomba",
            ImpactComparison::BabyCousin => "baby_cousin",
            ImpactComparison::RegionalExtinction => "regional_extinction",
            ImpactComparison::DinosaurKiller => "dinosaur_killer",
            ImpactComparison::PlanetShattering => "planet_shattering",
        }
    }

    /// Short name of the reference event.
    pub fn label(self) -> &'static str {
        match self {
            ImpactComparison::ConventionalBomb => "large conventional bomb",
            ImpactComparison::Hiroshima => "Hiroshima bomb",
            ImpactComparison::NuclearWarhead => "modern nuclear warhead",
            ImpactComparison::TsarBomba => "Tsar Bomba",
            ImpactComparison::BabyCousin => "Chicxulub impactor's baby cousin",
            ImpactComparison::RegionalExtinction => "regional extinction-level event",
            ImpactComparison::DinosaurKiller => "Chicxulub dinosaur-killer",
            ImpactComparison::PlanetShattering => "planet-shattering cataclysm",
        }
    }

    /// Sentence shown next to the figures.
    pub fn narrative(self) -> &'static str {
        match self {
            ImpactComparison::ConventionalBomb => "Equivalent to a large conventional bomb",
            ImpactComparison::Hiroshima => "Comparable to the Hiroshima bomb",
            ImpactComparison::NuclearWarhead => "Comparable to a modern nuclear warhead",
            ImpactComparison::TsarBomba => "Comparable to the Tsar Bomba",
            ImpactComparison::BabyCousin => "Comparable to the Chicxulub impactor's baby cousin",
            ImpactComparison::RegionalExtinction => "Regional extinction-level event",
            ImpactComparison::DinosaurKiller => "Comparable to the Chicxulub dinosaur-killer",
            ImpactComparison::PlanetShattering => "Planet-shattering cataclysm",
        }
    }
}

impl std::fmt::Display for ImpactComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.narrative())
    }
}
