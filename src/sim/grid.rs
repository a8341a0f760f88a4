//! Radial track geometry
//!
//! The track is a ring between `inner_radius` and `outer_radius`, cut into N
//! equal wedges by N spokes. Spoke i and spoke (i + 1) mod N bound segment i.
//! Every index handed to the grid is wrapped, so callers never go out of range.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// Both ends of one spoke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpokePoint {
    /// Where the spoke meets the inner rim
    pub inner: Vec2,
    /// Where the spoke meets the outer rim
    pub outer: Vec2,
}

/// Precomputed spokes of the track. Immutable after `build`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialGrid {
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    spokes: Vec<SpokePoint>,
}

impl RadialGrid {
    /// Lay out `segment_count` spokes evenly around `center`.
    ///
    /// Spoke 0 points along +x; angles increase with the index.
    ///
    /// # Panics
    ///
    /// Panics if `segment_count` is zero. [`Tuning::validate`] rejects fewer
    /// than 3 segments, so grids from [`Tuning::build_grid`] never panic.
    ///
    /// [`Tuning::validate`]: crate::tuning::Tuning::validate
    /// [`Tuning::build_grid`]: crate::tuning::Tuning::build_grid
    pub fn build(segment_count: usize, inner_radius: f32, outer_radius: f32, center: Vec2) -> Self {
        assert!(segment_count > 0, "radial grid needs at least one segment");

        let spokes = (0..segment_count)
            .map(|i| {
                let angle = i as f32 / segment_count as f32 * std::f32::consts::TAU;
                SpokePoint {
                    inner: center + polar_to_cartesian(inner_radius, angle),
                    outer: center + polar_to_cartesian(outer_radius, angle),
                }
            })
            .collect();

        Self {
            center,
            inner_radius,
            outer_radius,
            spokes,
        }
    }

    /// Number of segments (equal to the number of spokes)
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.spokes.len()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn spokes(&self) -> &[SpokePoint] {
        &self.spokes
    }

    /// Wrap any signed index into [0, N)
    #[inline]
    pub fn wrap_segment(&self, index: i64) -> usize {
        index.rem_euclid(self.segment_count() as i64) as usize
    }

    /// Spoke at `index` mod N
    #[inline]
    pub fn spoke(&self, index: usize) -> SpokePoint {
        self.spokes[index % self.segment_count()]
    }

    /// The two spokes bounding `segment`
    pub fn segment_bounds(&self, segment: usize) -> (SpokePoint, SpokePoint) {
        (self.spoke(segment), self.spoke(segment + 1))
    }

    /// Midpoint of the segment's inner edge (where enemies appear)
    pub fn inner_midpoint(&self, segment: usize) -> Vec2 {
        let (a, b) = self.segment_bounds(segment);
        (a.inner + b.inner) / 2.0
    }

    /// Midpoint of the segment's outer edge (where the player sits)
    pub fn outer_midpoint(&self, segment: usize) -> Vec2 {
        let (a, b) = self.segment_bounds(segment);
        (a.outer + b.outer) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn default_grid() -> RadialGrid {
        RadialGrid::build(SEGMENTS, INNER_RADIUS, OUTER_RADIUS, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_spoke_zero_points_along_x() {
        let grid = default_grid();
        let spoke = grid.spoke(0);
        assert!((spoke.inner - Vec2::new(500.0, 300.0)).length() < 1e-4);
        assert!((spoke.outer - Vec2::new(700.0, 300.0)).length() < 1e-4);
    }

    #[test]
    fn test_spokes_lie_on_their_rims() {
        let grid = default_grid();
        assert_eq!(grid.segment_count(), SEGMENTS);
        for spoke in grid.spokes() {
            assert!(((spoke.inner - grid.center()).length() - INNER_RADIUS).abs() < 1e-3);
            assert!(((spoke.outer - grid.center()).length() - OUTER_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_last_segment_wraps_to_spoke_zero() {
        let grid = default_grid();
        let (a, b) = grid.segment_bounds(SEGMENTS - 1);
        assert_eq!(a, grid.spokes()[SEGMENTS - 1]);
        assert_eq!(b, grid.spokes()[0]);
    }

    #[test]
    fn test_wrap_segment() {
        let grid = default_grid();
        assert_eq!(grid.wrap_segment(-1), SEGMENTS - 1);
        assert_eq!(grid.wrap_segment(SEGMENTS as i64), 0);
        assert_eq!(grid.wrap_segment(3), 3);
        assert_eq!(grid.wrap_segment(-(SEGMENTS as i64) * 3 - 2), SEGMENTS - 2);
    }

    #[test]
    fn test_midpoints_sit_inside_rims() {
        let grid = default_grid();
        for seg in 0..SEGMENTS {
            let inner = (grid.inner_midpoint(seg) - grid.center()).length();
            let outer = (grid.outer_midpoint(seg) - grid.center()).length();
            // Chord midpoints are a little inside the circle
            assert!(inner < INNER_RADIUS && inner > INNER_RADIUS * 0.95);
            assert!(outer < OUTER_RADIUS && outer > OUTER_RADIUS * 0.95);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = default_grid();
        let b = default_grid();
        assert_eq!(a.spokes(), b.spokes());
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_zero_segments_panics() {
        RadialGrid::build(0, INNER_RADIUS, OUTER_RADIUS, Vec2::ZERO);
    }

    proptest::proptest! {
        #[test]
        fn prop_wrap_segment_in_range(index in proptest::prelude::any::<i32>()) {
            let grid = default_grid();
            let wrapped = grid.wrap_segment(index as i64);
            proptest::prop_assert!(wrapped < SEGMENTS);
            proptest::prop_assert_eq!(wrapped as i64, (index as i64).rem_euclid(SEGMENTS as i64));
        }
    }
}
