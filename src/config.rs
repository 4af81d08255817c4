//! Scorer configuration.
//!
//! `ScoringConfig` holds the numeric and policy knobs and can be loaded from
//! any serde format; missing fields take their defaults. `ScorerBuilder`
//! combines it with the lookup tables into an immutable `EfficiencyScorer`.

use crate::catalog::*;
use crate::constants::*;
use crate::footprint::RangePolicy;
use crate::influence::InfluenceTable;
use crate::scoring::EfficiencyScorer;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Final efficiencies are capped at this value.
    pub upper_bound: f64,
    pub range_policy: RangePolicy,
    /// Attributes used for kinds the catalog does not know.
    pub default_attributes: BuildingAttributes,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            upper_bound: EFFICIENCY_UPPER_BOUND,
            range_policy: RangePolicy::default(),
            default_attributes: BuildingAttributes::default(),
        }
    }
}

/// Append-only builder for an [`EfficiencyScorer`].
///
/// Anything not set explicitly uses the standard catalog, influence table
/// and exclusion rules.
pub struct ScorerBuilder {
    config: ScoringConfig,
    attributes: Option<Box<dyn AttributeSource + Send + Sync>>,
    influence: Option<InfluenceTable>,
    exclusions: Option<ExclusionRules>,
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScorerBuilder {
    pub fn new() -> Self {
        ScorerBuilder {
            config: ScoringConfig::default(),
            attributes: None,
            influence: None,
            exclusions: None,
        }
    }

    /// Replace all numeric and policy settings at once.
    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the cap on final efficiency (default: 150).
    pub fn upper_bound(mut self, upper_bound: f64) -> Self {
        self.config.upper_bound = upper_bound;
        self
    }

    pub fn range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.config.range_policy = range_policy;
        self
    }

    pub fn default_attributes(mut self, attributes: BuildingAttributes) -> Self {
        self.config.default_attributes = attributes;
        self
    }

    pub fn catalog(self, catalog: BuildingCatalog) -> Self {
        self.attribute_source(catalog)
    }

    /// Use a caller-provided attribute lookup instead of a catalog.
    pub fn attribute_source<S: AttributeSource + Send + Sync + 'static>(mut self, source: S) -> Self {
        self.attributes = Some(Box::new(source));
        self
    }

    pub fn influence(mut self, table: InfluenceTable) -> Self {
        self.influence = Some(table);
        self
    }

    pub fn exclusions(mut self, rules: ExclusionRules) -> Self {
        self.exclusions = Some(rules);
        self
    }

    pub fn build(self) -> EfficiencyScorer {
        EfficiencyScorer {
            config: self.config,
            attributes: self
                .attributes
                .unwrap_or_else(|| Box::new(BuildingCatalog::standard())),
            influence: self.influence.unwrap_or_else(InfluenceTable::standard),
            exclusions: self.exclusions.unwrap_or_else(ExclusionRules::standard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Building;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: ScoringConfig = serde_json::from_str(r#"{"range_policy":"mutual"}"#).unwrap();

        assert_eq!(config.range_policy, RangePolicy::Mutual);
        assert_eq!(config.upper_bound, 150.0);
        assert_eq!(config.default_attributes, BuildingAttributes::default());
    }

    #[test]
    fn builder_applies_upper_bound() {
        let scorer = ScorerBuilder::new().upper_bound(90.0).build();
        let buildings = [
            Building::new("CONDENSER_PLANT_4", 0, 0),
            Building::new("POWER_STATION_1", 3, 0),
        ];

        assert_eq!(scorer.compute(&buildings).unwrap()[0].efficiency, 90.0);
    }

    #[test]
    fn builder_uses_custom_attribute_source() {
        struct Uniform;

        impl AttributeSource for Uniform {
            fn attributes(&self, _kind: &str) -> Option<BuildingAttributes> {
                Some(BuildingAttributes::new(1, 1, 50.0, 3))
            }
        }

        let scorer = ScorerBuilder::new().attribute_source(Uniform).build();

        assert_eq!(scorer.attributes_of("ANYTHING").base_efficiency, 50.0);
        assert_eq!(
            scorer.compute(&[Building::new("MINE_1", 0, 0)]).unwrap()[0].efficiency,
            50.0
        );
    }

    #[test]
    fn default_attributes_apply_to_unknown_kinds() {
        let scorer = ScorerBuilder::new()
            .default_attributes(BuildingAttributes::new(2, 2, 80.0, 6))
            .build();

        assert_eq!(
            scorer.compute(&[Building::new("CRYSTAL_LUMITERN_1", 2, 24)]).unwrap()[0].efficiency,
            80.0
        );
    }

    #[test]
    fn mutual_policy_uses_neighbour_radius() {
        // A radius-1 power station three cells away cannot see the condenser back.
        let catalog = BuildingCatalog::standard().with(POWER_STATION, BuildingAttributes::new(2, 2, 80.0, 1));
        let buildings = [
            Building::new("CONDENSER_PLANT_4", 0, 0),
            Building::new("POWER_STATION_1", 5, 0),
        ];

        let anchor = ScorerBuilder::new().catalog(catalog.clone()).build();
        let mutual = ScorerBuilder::new()
            .catalog(catalog)
            .range_policy(RangePolicy::Mutual)
            .build();

        assert!(anchor.compute(&buildings).unwrap()[0].efficiency > 80.0);
        assert_eq!(mutual.compute(&buildings).unwrap()[0].efficiency, 80.0);
    }
}
