//! Building instances as supplied by the caller.
//!
//! A building's type string carries a trailing level suffix
//! (`CONDENSER_PLANT_4`). [`BuildingType::parse`] is the only place that
//! looks inside it; everything downstream works with the resolved kind.

use crate::error::EngineError;
use crate::location::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A type string split into its kind and level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuildingType<'a> {
    pub kind: &'a str,
    pub level: u32,
}

impl<'a> BuildingType<'a> {
    /// Strip the final `_<digits>` segment. Type strings without a numeric
    /// suffix are their own kind, with level 0.
    pub fn parse(type_string: &'a str) -> Self {
        if let Some((kind, suffix)) = type_string.rsplit_once('_') {
            if !kind.is_empty() && !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
            {
                if let Ok(level) = suffix.parse() {
                    return BuildingType { kind, level };
                }
            }
        }

        BuildingType {
            kind: type_string,
            level: 0,
        }
    }
}

/// A placed building: its full type string and the anchor (top-left) cell of
/// its footprint.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Building {
    building_type: String,
    location: Location,
}

impl Building {
    pub fn new(building_type: impl Into<String>, x: i32, y: i32) -> Self {
        Building {
            building_type: building_type.into(),
            location: Location::from_coords(x, y),
        }
    }

    pub fn building_type(&self) -> &str {
        &self.building_type
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn kind(&self) -> &str {
        BuildingType::parse(&self.building_type).kind
    }

    pub fn level(&self) -> u32 {
        BuildingType::parse(&self.building_type).level
    }
}

/// Layout strings encode a building as a `["TYPE_N", x, y]` triple.
impl Serialize for Building {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.building_type, self.location.x(), self.location.y()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Building {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (building_type, x, y) = <(String, i32, i32)>::deserialize(deserializer)?;
        if building_type.is_empty() {
            return Err(serde::de::Error::custom("empty building type"));
        }
        Ok(Building::new(building_type, x, y))
    }
}

/// A loosely-typed building row, as produced by save-game extraction where
/// any column may be missing. Convert with [`BuildingRecord::into_building`]
/// to validate it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(rename = "buildingTypeString", default)]
    pub building_type: Option<String>,
    #[serde(rename = "X", default)]
    pub x: Option<i32>,
    #[serde(rename = "Y", default)]
    pub y: Option<i32>,
}

impl BuildingRecord {
    /// Validate the record. `index` is its position in the caller's input and
    /// is reported back on failure.
    pub fn into_building(self, index: usize) -> Result<Building, EngineError> {
        let building_type = match self.building_type {
            Some(t) if !t.is_empty() => t,
            _ => return Err(EngineError::invalid_input(index, "missing building type")),
        };
        let x = self
            .x
            .ok_or_else(|| EngineError::invalid_input(index, "missing x coordinate"))?;
        let y = self
            .y
            .ok_or_else(|| EngineError::invalid_input(index, "missing y coordinate"))?;

        Ok(Building::new(building_type, x, y))
    }
}

/// Validate a batch of records, failing on the first malformed one.
pub fn buildings_from_records(
    records: impl IntoIterator<Item = BuildingRecord>,
) -> Result<Vec<Building>, EngineError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_building(index))
        .collect()
}
