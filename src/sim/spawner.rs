//! Enemy spawning
//!
//! One roll per tick; at most one enemy per tick.

use rand::Rng;

use super::grid::RadialGrid;
use super::state::PathMotion;

/// Roll for a new enemy.
///
/// On success returns the chosen segment and a path from that segment's
/// inner-edge midpoint to its outer-edge midpoint, with `t = 0`.
pub fn maybe_spawn_enemy<R: Rng>(
    rng: &mut R,
    grid: &RadialGrid,
    spawn_chance: f32,
) -> Option<(usize, PathMotion)> {
    let roll: f32 = rng.random();
    if roll >= spawn_chance {
        return None;
    }

    let segment = rng.random_range(0..grid.segment_count());
    let path = PathMotion::new(grid.inner_midpoint(segment), grid.outer_midpoint(segment));
    Some((segment, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn grid() -> RadialGrid {
        RadialGrid::build(16, 100.0, 300.0, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_certain_spawn_builds_inner_to_outer_path() {
        let grid = grid();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let (segment, path) = maybe_spawn_enemy(&mut rng, &grid, 1.0).unwrap();
            assert!(segment < 16);
            assert_eq!(path.t, 0.0);
            assert_eq!(path.start, grid.inner_midpoint(segment));
            assert_eq!(path.end, grid.outer_midpoint(segment));
        }
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let grid = grid();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(maybe_spawn_enemy(&mut rng, &grid, 0.0).is_none());
        }
    }

    #[test]
    fn test_default_chance_is_rare() {
        let grid = grid();
        let mut rng = Pcg32::seed_from_u64(42);
        let spawned = (0..10_000)
            .filter(|_| maybe_spawn_enemy(&mut rng, &grid, 0.02).is_some())
            .count();
        // 2% of 10k = 200; generous bounds for a fixed seed
        assert!((100..300).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_segments_cover_the_track() {
        let grid = grid();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = [false; 16];
        for _ in 0..2000 {
            if let Some((segment, _)) = maybe_spawn_enemy(&mut rng, &grid, 1.0) {
                seen[segment] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
