use serde::*;

/// A cell on the integer building grid.
///
/// Coordinates are signed: halo cells around a building near the plot edge
/// may lie outside the plot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    pub fn from_coords(x: i32, y: i32) -> Self {
        Location { x, y }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y
    }

    /// Shifted location, or `None` when it would leave the `i32` grid.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Location {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Straight-line distance between cell coordinates.
    pub fn distance_to(self, other: Self) -> f64 {
        (self.distance_squared_to(other) as f64).sqrt()
    }

    /// Squared straight-line distance. Exact (so usable for comparisons)
    /// until it saturates at `u64::MAX` for cells near opposite grid limits.
    pub fn distance_squared_to(self, other: Self) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dy = u64::from(self.y.abs_diff(other.y));

        (dx * dx).saturating_add(dy * dy)
    }

    /// Chessboard distance (max of the axis deltas).
    pub fn chebyshev_distance_to(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Location::from_coords(x, y)
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(i32, i32)>::deserialize(deserializer).map(Location::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Location::from_coords(0, 0);
        let b = Location::from_coords(3, 4);

        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_squared_to(b), 25);
        assert_eq!(a.chebyshev_distance_to(b), 4);
    }

    #[test]
    fn negative_coordinates_are_supported() {
        let a = Location::from_coords(-2, 5);
        let b = a.checked_offset(4, -7).unwrap();

        assert_eq!(b, Location::from_coords(2, -2));
        assert_eq!(a.chebyshev_distance_to(b), 7);
    }

    #[test]
    fn distances_at_grid_limits() {
        let a = Location::from_coords(i32::MIN, 0);
        let b = Location::from_coords(i32::MAX, 0);

        assert_eq!(a.chebyshev_distance_to(b), u32::MAX);
        assert_eq!(a.distance_squared_to(b), u64::from(u32::MAX).pow(2));
    }

    #[test]
    fn checked_offset_stops_at_grid_limits() {
        let edge = Location::from_coords(i32::MAX - 1, i32::MIN);

        assert_eq!(edge.checked_offset(1, 0), Some(Location::from_coords(i32::MAX, i32::MIN)));
        assert_eq!(edge.checked_offset(2, 0), None);
        assert_eq!(edge.checked_offset(0, -1), None);
    }

    #[test]
    fn serializes_as_coordinate_pair() {
        let loc = Location::from_coords(27, 33);
        let json = serde_json::to_string(&loc).unwrap();

        assert_eq!(json, "[27,33]");
        assert_eq!(serde_json::from_str::<Location>(&json).unwrap(), loc);
    }
}
