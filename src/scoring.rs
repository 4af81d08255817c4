//! Efficiency aggregation over a whole plot.
//!
//! Each scored building starts at its base efficiency and accumulates one
//! delta per other influencing building on the plot. The sum is capped at
//! the configured upper bound. Buildings are scored independently of each
//! other, so the outer loop can be sharded (see `compute_parallel`).

use crate::building::*;
use crate::catalog::*;
use crate::config::ScoringConfig;
use crate::error::EngineError;
use crate::footprint::*;
use crate::formula::*;
use crate::influence::*;
use crate::location::*;
use log::*;
use serde::{Deserialize, Serialize};

/// Final efficiency of one scored building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyResult {
    /// The building's full type string, level suffix included.
    pub name: String,
    pub efficiency: f64,
}

/// One neighbour's non-zero effect on a scored building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Type string of the neighbour.
    pub from: String,
    /// Position of the neighbour in the input.
    pub index: usize,
    pub power: i32,
    /// Closest-cell distance. Only in-range neighbours contribute.
    pub distance: f64,
    pub delta: f64,
}

/// A result together with the contributions that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredBuilding {
    pub result: EfficiencyResult,
    pub base_efficiency: f64,
    pub contributions: Vec<Contribution>,
}

/// A building with its kind, attributes and geometry resolved.
struct ResolvedBuilding<'a> {
    building: &'a Building,
    kind: &'a str,
    attributes: BuildingAttributes,
    footprint: Footprint,
    cells: Vec<Location>,
    halo: Halo,
    flags: ExclusionFlags,
}

/// Immutable efficiency scorer. Build one with [`crate::config::ScorerBuilder`].
pub struct EfficiencyScorer {
    pub(crate) config: ScoringConfig,
    pub(crate) attributes: Box<dyn AttributeSource + Send + Sync>,
    pub(crate) influence: InfluenceTable,
    pub(crate) exclusions: ExclusionRules,
}

impl EfficiencyScorer {
    /// Scorer with the standard catalog, influence table and exclusions.
    pub fn standard() -> Self {
        crate::config::ScorerBuilder::new().build()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn influence_table(&self) -> &InfluenceTable {
        &self.influence
    }

    pub fn exclusions(&self) -> &ExclusionRules {
        &self.exclusions
    }

    /// Attributes for `kind`, or the configured defaults when unknown.
    pub fn attributes_of(&self, kind: &str) -> BuildingAttributes {
        attributes_or(&*self.attributes, kind, self.config.default_attributes)
    }

    /// Efficiency of every scored building, in input order.
    pub fn compute(&self, buildings: &[Building]) -> Result<Vec<EfficiencyResult>, EngineError> {
        let resolved = self.resolve(buildings)?;

        let scored: Vec<_> = scored_indices(&resolved)
            .into_iter()
            .map(|index| self.score_building(index, &resolved, false))
            .collect();

        Ok(summarise("Scored", buildings.len(), scored)
            .into_iter()
            .map(|building| building.result)
            .collect())
    }

    /// As [`compute`](Self::compute), keeping every non-zero contribution.
    pub fn compute_with_trace(
        &self,
        buildings: &[Building],
    ) -> Result<Vec<ScoredBuilding>, EngineError> {
        let resolved = self.resolve(buildings)?;

        let scored: Vec<_> = scored_indices(&resolved)
            .into_iter()
            .map(|index| self.score_building(index, &resolved, true))
            .collect();

        Ok(summarise("Traced", buildings.len(), scored))
    }

    /// As [`compute`](Self::compute), scoring buildings on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn compute_parallel(
        &self,
        buildings: &[Building],
    ) -> Result<Vec<EfficiencyResult>, EngineError> {
        use rayon::prelude::*;

        let resolved = self.resolve(buildings)?;
        let scored: Vec<_> = scored_indices(&resolved)
            .par_iter()
            .map(|&index| self.score_building(index, &resolved, false))
            .collect();

        Ok(summarise("Scored in parallel", buildings.len(), scored)
            .into_iter()
            .map(|building| building.result)
            .collect())
    }

    /// Change in efficiency of `building` caused by `other` alone, or 0 when
    /// `other` is out of range or has no influence on it.
    pub fn pair_delta(&self, building: &Building, other: &Building) -> Result<f64, EngineError> {
        let pair = [building.clone(), other.clone()];
        let resolved = self.resolve(&pair)?;

        Ok(self.neighbour_delta(&resolved[0], &resolved[1]).1)
    }

    fn resolve<'a>(&self, buildings: &'a [Building]) -> Result<Vec<ResolvedBuilding<'a>>, EngineError> {
        buildings
            .iter()
            .enumerate()
            .map(|(index, building)| {
                if building.building_type().is_empty() {
                    return Err(EngineError::invalid_input(index, "empty building type"));
                }

                let kind = BuildingType::parse(building.building_type()).kind;
                let attributes = self.attributes_of(kind);
                let footprint =
                    Footprint::new(building.location(), attributes.width, attributes.height);

                if footprint.is_empty() {
                    return Err(EngineError::EmptyFootprint {
                        kind: kind.to_string(),
                    });
                }

                let halo = footprint.halo(attributes.radius).ok_or_else(|| {
                    EngineError::invalid_input(index, "footprint or halo exceeds the coordinate range")
                })?;

                Ok(ResolvedBuilding {
                    building,
                    kind,
                    attributes,
                    cells: footprint.cells().collect(),
                    halo,
                    footprint,
                    flags: self.exclusions.flags(kind),
                })
            })
            .collect()
    }

    fn score_building(
        &self,
        index: usize,
        resolved: &[ResolvedBuilding],
        keep_trace: bool,
    ) -> (ScoredBuilding, usize) {
        let target = &resolved[index];
        let base_efficiency = target.attributes.base_efficiency;
        let mut total = base_efficiency;
        let mut contributions = Vec::new();
        let mut pairs = 0;

        for (other_index, other) in resolved.iter().enumerate() {
            if other_index == index || other.flags.contains(ExclusionFlags::NO_INFLUENCE) {
                continue;
            }

            pairs += 1;

            let (distance, delta) = match self.neighbour_delta(target, other) {
                (Some(distance), delta) if delta != 0.0 => (distance, delta),
                _ => continue,
            };

            total += delta;

            trace!(
                "{} ({:?}): {:+.3} from {} ({:?})",
                target.building.building_type(),
                target.footprint.origin,
                delta,
                other.building.building_type(),
                other.footprint.origin
            );

            if keep_trace {
                contributions.push(Contribution {
                    from: other.building.building_type().to_string(),
                    index: other_index,
                    power: self.influence.influence(target.kind, other.kind),
                    distance,
                    delta,
                });
            }
        }

        let efficiency = total.min(self.config.upper_bound);

        let scored = ScoredBuilding {
            result: EfficiencyResult {
                name: target.building.building_type().to_string(),
                efficiency,
            },
            base_efficiency,
            contributions,
        };

        (scored, pairs)
    }

    /// Distance (when in range) and delta contributed by `other` to `target`.
    fn neighbour_delta(
        &self,
        target: &ResolvedBuilding,
        other: &ResolvedBuilding,
    ) -> (Option<f64>, f64) {
        let power = self.influence.influence(target.kind, other.kind);
        if power == 0 {
            return (None, 0.0);
        }

        let distance = minimum_distance(&target.cells, &other.cells)
            .filter(|pair| {
                self.config
                    .range_policy
                    .accepts(pair, &target.halo, &other.halo)
            })
            .map(|pair| pair.distance);

        let delta = pair_delta(
            distance,
            target.attributes.radius,
            power,
            target.attributes.base_efficiency,
        );

        (distance, delta)
    }
}

/// Log one summary line for a run and drop the per-building pair counts.
fn summarise(label: &str, total: usize, scored: Vec<(ScoredBuilding, usize)>) -> Vec<ScoredBuilding> {
    let pairs: usize = scored.iter().map(|(_, pairs)| pairs).sum();

    debug!(
        "{} {} of {} buildings, {} pair evaluations",
        label,
        scored.len(),
        total,
        pairs
    );

    scored.into_iter().map(|(building, _)| building).collect()
}

fn scored_indices(resolved: &[ResolvedBuilding]) -> Vec<usize> {
    resolved
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.flags.contains(ExclusionFlags::NOT_SCORED))
        .map(|(index, _)| index)
        .collect()
}

/// Score `buildings` with the standard scorer.
pub fn compute(buildings: &[Building]) -> Result<Vec<EfficiencyResult>, EngineError> {
    EfficiencyScorer::standard().compute(buildings)
}
