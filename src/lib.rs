//! Building efficiency scoring for a 2-D plot.
//!
//! Each building's efficiency is its base efficiency plus a distance-decayed
//! influence from every other building near it, capped at an upper bound.
//! The scorer is a pure function of the building list, the attribute lookup
//! and the influence table.

pub mod building;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod footprint;
pub mod formula;
pub mod influence;
pub mod location;
pub mod plot;
pub mod production;
pub mod scoring;

pub use building::{buildings_from_records, Building, BuildingRecord, BuildingType};
pub use catalog::{AttributeSource, BuildingAttributes, BuildingCatalog, ExclusionFlags, ExclusionRules};
pub use config::{ScorerBuilder, ScoringConfig};
pub use error::EngineError;
pub use footprint::{footprint_cells, in_range, minimum_distance, ClosestPair, Footprint, Halo, RangePolicy};
pub use formula::{pair_delta, pair_efficiency};
pub use influence::InfluenceTable;
pub use location::Location;
pub use plot::plot_anchor;
pub use production::scaled_output;
pub use scoring::{compute, Contribution, EfficiencyResult, EfficiencyScorer, ScoredBuilding};
