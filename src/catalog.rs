use crate::constants::*;
use bitflags::*;
use fnv::FnvHashMap;
use log::*;
use serde::{Deserialize, Serialize};

/// Per-kind building attributes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingAttributes {
    pub width: u32,
    pub height: u32,
    pub base_efficiency: f64,
    /// Influence search radius, in cells.
    pub radius: u32,
}

impl BuildingAttributes {
    pub fn new(width: u32, height: u32, base_efficiency: f64, radius: u32) -> Self {
        BuildingAttributes {
            width,
            height,
            base_efficiency,
            radius,
        }
    }
}

impl Default for BuildingAttributes {
    fn default() -> Self {
        BuildingAttributes {
            width: DEFAULT_FOOTPRINT_SIZE,
            height: DEFAULT_FOOTPRINT_SIZE,
            base_efficiency: DEFAULT_BASE_EFFICIENCY,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Trait for providing building attributes to the scorer, keyed by kind.
/// Implementations may be backed by reference data loaded by the caller.
pub trait AttributeSource {
    fn attributes(&self, kind: &str) -> Option<BuildingAttributes>;
}

/// Attribute lookup table with a fallback for unknown kinds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildingCatalog {
    entries: FnvHashMap<String, BuildingAttributes>,
}

impl BuildingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes for the kinds that take part in efficiency scoring.
    pub fn standard() -> Self {
        let mut catalog = BuildingCatalog::new();

        for converter in CONVERTERS {
            catalog.insert(converter, BuildingAttributes::new(3, 3, 80.0, 7));
        }
        for extractor in EXTRACTORS {
            catalog.insert(extractor, BuildingAttributes::new(2, 2, 100.0, 6));
        }
        catalog.insert(POWER_STATION, BuildingAttributes::new(2, 2, 80.0, 6));

        catalog
    }

    pub fn insert(&mut self, kind: impl Into<String>, attributes: BuildingAttributes) {
        self.entries.insert(kind.into(), attributes);
    }

    pub fn with(mut self, kind: impl Into<String>, attributes: BuildingAttributes) -> Self {
        self.insert(kind, attributes);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AttributeSource for BuildingCatalog {
    fn attributes(&self, kind: &str) -> Option<BuildingAttributes> {
        self.entries.get(kind).copied()
    }
}

/// Look up `kind`, falling back to `fallback` when the source has no entry.
pub fn attributes_or(
    source: &dyn AttributeSource,
    kind: &str,
    fallback: BuildingAttributes,
) -> BuildingAttributes {
    source.attributes(kind).unwrap_or_else(|| {
        debug!("No attributes for building kind {}, using defaults", kind);
        fallback
    })
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ExclusionFlags: u8 {
        const NONE = 0;
        /// No efficiency is computed or reported for this kind.
        const NOT_SCORED = 1;
        /// This kind is skipped when summing neighbour influence.
        const NO_INFLUENCE = 2;
    }
}

/// Kinds left out of scoring and/or neighbour influence.
#[derive(Clone, Debug, Default)]
pub struct ExclusionRules {
    flags: FnvHashMap<String, ExclusionFlags>,
}

impl ExclusionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Power stations are neighbours only; storage and infrastructure kinds
    /// are ignored entirely.
    pub fn standard() -> Self {
        let mut rules = ExclusionRules::new();

        rules.exclude(POWER_STATION, ExclusionFlags::NOT_SCORED);
        for kind in INERT_KINDS {
            rules.exclude(kind, ExclusionFlags::NOT_SCORED | ExclusionFlags::NO_INFLUENCE);
        }

        rules
    }

    pub fn exclude(&mut self, kind: impl Into<String>, flags: ExclusionFlags) {
        *self.flags.entry(kind.into()).or_default() |= flags;
    }

    pub fn flags(&self, kind: &str) -> ExclusionFlags {
        self.flags.get(kind).copied().unwrap_or(ExclusionFlags::NONE)
    }

    pub fn is_scored(&self, kind: &str) -> bool {
        !self.flags(kind).contains(ExclusionFlags::NOT_SCORED)
    }

    pub fn exerts_influence(&self, kind: &str) -> bool {
        !self.flags(kind).contains(ExclusionFlags::NO_INFLUENCE)
    }
}
