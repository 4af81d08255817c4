//! Conversion from plot-metadata coordinates to grid anchors.
//!
//! Plot metadata reports each building at its far corner on a grid mirrored
//! on both axes. The scorer wants the near (top-left) corner in grid space.

use crate::constants::PLOT_SIZE;
use crate::location::*;

/// Grid anchor of a `width x height` building reported at `(plot_x, plot_y)`,
/// or `None` when the anchor falls outside the `i32` grid.
pub fn plot_anchor(plot_x: i32, plot_y: i32, width: u32, height: u32) -> Option<Location> {
    let mirror = i64::from(PLOT_SIZE - 1);
    let x = mirror - i64::from(plot_x) - (i64::from(width) - 2);
    let y = mirror - i64::from(plot_y) - (i64::from(height) - 2);

    Some(Location::from_coords(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_is_plain_mirror() {
        assert_eq!(plot_anchor(0, 0, 2, 2), Some(Location::from_coords(49, 49)));
        assert_eq!(plot_anchor(22, 16, 2, 2), Some(Location::from_coords(27, 33)));
    }

    #[test]
    fn larger_footprints_shift_anchor() {
        assert_eq!(plot_anchor(21, 15, 3, 3), Some(Location::from_coords(27, 33)));
        assert_eq!(plot_anchor(10, 10, 3, 2), Some(Location::from_coords(38, 39)));
    }

    #[test]
    fn anchor_outside_grid_is_none() {
        assert_eq!(plot_anchor(i32::MIN, 0, 2, 2), None);
        assert_eq!(plot_anchor(0, 0, u32::MAX, 2), None);
    }
}
