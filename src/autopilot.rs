//! Idle/demo mode
//!
//! Picks commands for an unattended player: chase the enemy closest to the rim
//! and shoot once lined up with it.

use crate::sim::{Command, RenderFeed};

/// Ticks between moves, so the demo player can't sweep the track in one frame
const MOVE_INTERVAL: u64 = 3;
/// Ticks between shots while lined up
const FIRE_INTERVAL: u64 = 6;

/// Command to issue on tick `tick`, if any
pub fn next_command(feed: &RenderFeed<'_>, tick: u64) -> Option<Command> {
    let n = feed.grid.segment_count();
    let threat = feed
        .enemies
        .iter()
        .max_by(|a, b| a.path.t.total_cmp(&b.path.t))?;

    // Steps to the right (increasing index) to reach the threat
    let diff = (threat.segment + n - feed.player_segment % n) % n;
    if diff == 0 {
        return tick.is_multiple_of(FIRE_INTERVAL).then_some(Command::Fire);
    }
    if !tick.is_multiple_of(MOVE_INTERVAL) {
        return None;
    }

    if diff <= n / 2 {
        Some(Command::MoveRight)
    } else {
        Some(Command::MoveLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, PathMotion, RadialGrid};
    use crate::tuning::Tuning;

    fn enemy_at(state: &mut GameState, grid: &RadialGrid, segment: usize, t: f32) {
        let mut path = PathMotion::new(grid.inner_midpoint(segment), grid.outer_midpoint(segment));
        path.t = t;
        state.push_enemy(segment, path);
    }

    #[test]
    fn test_idle_without_enemies() {
        let grid = Tuning::default().build_grid();
        let state = GameState::default();
        assert_eq!(next_command(&RenderFeed::new(&state, &grid), 0), None);
    }

    #[test]
    fn test_chases_most_advanced_enemy_shortest_way() {
        let grid = Tuning::default().build_grid();
        let mut state = GameState::default();
        enemy_at(&mut state, &grid, 2, 0.1);
        enemy_at(&mut state, &grid, 13, 0.6);

        // Segment 13 is three steps left of segment 0
        let feed = RenderFeed::new(&state, &grid);
        assert_eq!(next_command(&feed, 0), Some(Command::MoveLeft));
        // Between move slots it waits
        assert_eq!(next_command(&feed, 1), None);
    }

    #[test]
    fn test_moves_right_when_closer() {
        let grid = Tuning::default().build_grid();
        let mut state = GameState::default();
        state.player.segment = 14;
        enemy_at(&mut state, &grid, 1, 0.3);
        let feed = RenderFeed::new(&state, &grid);
        assert_eq!(next_command(&feed, 3), Some(Command::MoveRight));
    }

    #[test]
    fn test_fires_when_lined_up() {
        let grid = Tuning::default().build_grid();
        let mut state = GameState::default();
        state.player.segment = 5;
        enemy_at(&mut state, &grid, 5, 0.4);
        let feed = RenderFeed::new(&state, &grid);
        assert_eq!(next_command(&feed, 12), Some(Command::Fire));
        assert_eq!(next_command(&feed, 13), None);
    }
}
