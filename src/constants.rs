/// Plot edge length; plot-metadata coordinates are mirrored around `PLOT_SIZE - 1`.
pub const PLOT_SIZE: i32 = 50;

/// Final efficiency is never reported above this value.
pub const EFFICIENCY_UPPER_BOUND: f64 = 150.0;

/// Footprint edge length used when the catalog has no entry for a kind.
pub const DEFAULT_FOOTPRINT_SIZE: u32 = 2;
/// Base efficiency used when the catalog has no entry for a kind.
pub const DEFAULT_BASE_EFFICIENCY: f64 = 100.0;
/// Influence radius used when the catalog has no entry for a kind.
pub const DEFAULT_RADIUS: u32 = 6;

/// Wildcard marker for the second key of an influence table entry.
pub const INFLUENCE_WILDCARD: &str = "*";

pub const POWER_STATION: &str = "POWER_STATION";

pub const CONDENSER_PLANT: &str = "CONDENSER_PLANT";
pub const PHOTODISINTEGRATION_PLANT: &str = "PHOTODISINTEGRATION_PLANT";
pub const SEQUESTRIAN_PLANT: &str = "SEQUESTRIAN_PLANT";

pub const HYDROGEN_PUMP: &str = "HYDROGEN_PUMP";
pub const MINE: &str = "MINE";
pub const SEDIMENT_EXCAVATOR: &str = "SEDIMENT_EXCAVATOR";

pub const LAKE: &str = "LAKE";
pub const OUTCROP: &str = "OUTCROP";
pub const SILICON_MOUND: &str = "SILICON_MOUND";

pub const HYDROGEN_MATTER_SILO: &str = "HYDROGEN_MATTER_SILO";
pub const SILICON_MATTER_SILO: &str = "SILICON_MATTER_SILO";
pub const CARBON_MATTER_SILO: &str = "CARBON_MATTER_SILO";
pub const ENGINEERING_WORKSHOP: &str = "ENGINEERING_WORKSHOP";
pub const NEXUS: &str = "NEXUS";
pub const QUANTUM_FABRICANT: &str = "QUANTUM_FABRICANT";

/// Resource converters. Each one penalises the others and itself.
pub const CONVERTERS: [&str; 3] = [SEQUESTRIAN_PLANT, PHOTODISINTEGRATION_PLANT, CONDENSER_PLANT];

/// Resource extractors. Higher base efficiency than converters.
pub const EXTRACTORS: [&str; 3] = [HYDROGEN_PUMP, MINE, SEDIMENT_EXCAVATOR];

/// Storage and infrastructure kinds with no efficiency concept and no
/// influence on their neighbours.
pub const INERT_KINDS: [&str; 6] = [
    HYDROGEN_MATTER_SILO,
    ENGINEERING_WORKSHOP,
    NEXUS,
    SILICON_MATTER_SILO,
    QUANTUM_FABRICANT,
    CARBON_MATTER_SILO,
];

/// Resource tiles and extractors that feed a converter.
/// Returns an empty slice for kinds that are not converters.
pub fn matching_resources(converter: &str) -> &'static [&'static str] {
    match converter {
        SEQUESTRIAN_PLANT => &[OUTCROP, SEDIMENT_EXCAVATOR],
        PHOTODISINTEGRATION_PLANT => &[SILICON_MOUND, MINE],
        CONDENSER_PLANT => &[LAKE, HYDROGEN_PUMP],
        _ => &[],
    }
}

/// Output bonus (in percent) granted by the land tier a plot sits on.
/// Returns `None` for tiers outside 0..=5.
pub fn land_tier_bonus_percent(tier: u8) -> Option<f64> {
    match tier {
        0 | 1 => Some(0.0),
        2 => Some(33.33333333333),
        3 => Some(100.0),
        4 => Some(300.0),
        5 => Some(900.0),
        _ => None,
    }
}
