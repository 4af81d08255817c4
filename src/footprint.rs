//! Grid geometry: footprints, halos and closest-cell distances.
//!
//! A footprint is the `width x height` block of cells a building occupies.
//! A halo is every cell within `radius` (per axis) of some footprint cell,
//! i.e. the footprint grown by `radius` on every side. Halos are square, not
//! circular, even though distances between footprints are Euclidean.

use crate::location::*;
use fnv::FnvHashSet;
use itertools::*;
use serde::{Deserialize, Serialize};

/// The cells covered by a rectangular building anchored at `origin`.
pub fn footprint_cells(origin: Location, width: u32, height: u32) -> FnvHashSet<Location> {
    Footprint::new(origin, width, height).cells().collect()
}

/// Every cell reachable from a footprint cell by an offset in
/// `[-radius, radius]` on both axes. Cells beyond the `i32` grid are left out.
pub fn in_range(footprint: &Footprint, radius: u32) -> FnvHashSet<Location> {
    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    let mut points = FnvHashSet::default();

    for cell in footprint.cells() {
        for dx in -r..=r {
            for dy in -r..=r {
                if let Some(point) = cell.checked_offset(dx, dy) {
                    points.insert(point);
                }
            }
        }
    }

    points
}

/// Closest pair of distinct cells between two cell sets.
///
/// Returns `None` when no pair of distinct cells exists (both sets empty, or
/// both the same single cell). Ties keep the first pair in iteration order;
/// only the distance is significant.
pub fn minimum_distance(a: &[Location], b: &[Location]) -> Option<ClosestPair> {
    a.iter()
        .cartesian_product(b.iter())
        .filter(|(a, b)| a != b)
        .min_by_key(|(a, b)| a.distance_squared_to(**b))
        .map(|(&a, &b)| ClosestPair {
            distance: a.distance_to(b),
            a,
            b,
        })
}

/// Result of [`minimum_distance`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosestPair {
    pub distance: f64,
    pub a: Location,
    pub b: Location,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Footprint {
    pub origin: Location,
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(origin: Location, width: u32, height: u32) -> Self {
        Footprint {
            origin,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major cells. Cells past the `i32` grid are skipped; see
    /// [`Footprint::far_corner`].
    pub fn cells(&self) -> impl Iterator<Item = Location> + '_ {
        let origin = self.origin;
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);

        (0..width)
            .cartesian_product(0..height)
            .filter_map(move |(i, j)| origin.checked_offset(i, j))
    }

    /// The cell diagonally opposite the origin, or `None` when the footprint
    /// is empty or does not fit on the `i32` grid.
    pub fn far_corner(&self) -> Option<Location> {
        let dx = i32::try_from(self.width.checked_sub(1)?).ok()?;
        let dy = i32::try_from(self.height.checked_sub(1)?).ok()?;

        self.origin.checked_offset(dx, dy)
    }

    pub fn contains(&self, loc: Location) -> bool {
        let dx = i64::from(loc.x()) - i64::from(self.origin.x());
        let dy = i64::from(loc.y()) - i64::from(self.origin.y());

        dx >= 0 && dy >= 0 && dx < i64::from(self.width) && dy < i64::from(self.height)
    }

    /// Closest pair of distinct cells between this footprint and `other`.
    pub fn closest_pair(&self, other: &Footprint) -> Option<ClosestPair> {
        let a: Vec<_> = self.cells().collect();
        let b: Vec<_> = other.cells().collect();

        minimum_distance(&a, &b)
    }

    /// The halo around this footprint as a rectangle. Membership matches
    /// [`in_range`] exactly without materialising the cell set.
    ///
    /// Returns `None` when the footprint is empty or the halo bounds do not
    /// fit on the `i32` grid.
    pub fn halo(&self, radius: u32) -> Option<Halo> {
        let r = i32::try_from(radius).ok()?;

        Some(Halo {
            min: self.origin.checked_offset(-r, -r)?,
            max: self.far_corner()?.checked_offset(r, r)?,
        })
    }
}

/// Inclusive rectangle of cells; see [`Footprint::halo`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Halo {
    pub min: Location,
    pub max: Location,
}

impl Halo {
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.x() >= self.min.x()
            && loc.x() <= self.max.x()
            && loc.y() >= self.min.y()
            && loc.y() <= self.max.y()
    }
}

/// Which halo memberships a closest pair `(a*, b*)` must satisfy for
/// building B to be in range of building A.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// `a*` and `b*` both inside A's halo.
    #[default]
    AnchorHalo,
    /// As `AnchorHalo`, and `a*` and `b*` both inside B's halo (built with
    /// B's own radius).
    Mutual,
}

impl RangePolicy {
    pub fn accepts(self, pair: &ClosestPair, halo_a: &Halo, halo_b: &Halo) -> bool {
        let in_a = halo_a.contains(pair.a) && halo_a.contains(pair.b);

        match self {
            RangePolicy::AnchorHalo => in_a,
            RangePolicy::Mutual => in_a && halo_b.contains(pair.a) && halo_b.contains(pair.b),
        }
    }
}
