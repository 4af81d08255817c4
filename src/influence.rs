//! Directional influence between building kinds.
//!
//! `influence(a, b)` is the nominal power that a `b` neighbour exerts on an
//! `a` building. Lookup order: exact pair, then `(a, "*")`, then 0.

use crate::constants::*;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluenceTable {
    entries: FnvHashMap<String, FnvHashMap<String, i32>>,
}

impl InfluenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard set of converter, power and resource influences.
    pub fn standard() -> Self {
        let mut table = InfluenceTable::new();

        // Power stations have no efficiency of their own.
        table.insert(POWER_STATION, SEQUESTRIAN_PLANT, 0);

        for converter in CONVERTERS {
            table.insert(converter, POWER_STATION, 20);
            table.insert(converter, converter, -40);

            for other in CONVERTERS.iter().filter(|&&other| other != converter) {
                table.insert(converter, *other, -10);
            }

            for resource in matching_resources(converter) {
                table.insert(converter, *resource, 30);
            }
        }

        for extractor in EXTRACTORS {
            table.insert(extractor, POWER_STATION, 20);
        }

        table
    }

    pub fn insert(&mut self, kind: impl Into<String>, other: impl Into<String>, value: i32) {
        self.entries
            .entry(kind.into())
            .or_default()
            .insert(other.into(), value);
    }

    /// Set the value applied to `kind` by any neighbour without an exact entry.
    pub fn insert_wildcard(&mut self, kind: impl Into<String>, value: i32) {
        self.insert(kind, INFLUENCE_WILDCARD, value);
    }

    pub fn with(mut self, kind: impl Into<String>, other: impl Into<String>, value: i32) -> Self {
        self.insert(kind, other, value);
        self
    }

    pub fn influence(&self, kind: &str, other: &str) -> i32 {
        self.get(kind, other)
            .or_else(|| self.get(kind, INFLUENCE_WILDCARD))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, kind: &str, other: &str) -> Option<i32> {
        self.entries.get(kind)?.get(other).copied()
    }
}
