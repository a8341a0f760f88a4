//! Simulation tick and player commands
//!
//! A tick runs spawn, integrate, resolve in that order. Commands are applied
//! outside the tick, whenever the host delivers them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::grid::RadialGrid;
use super::motion;
use super::spawner::maybe_spawn_enemy;
use super::state::{GameEvent, GamePhase, GameState, PathMotion};
use crate::tuning::Tuning;

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Apply one command immediately. Ignored once the game is over.
pub fn apply_command(state: &mut GameState, grid: &RadialGrid, command: Command) {
    if state.phase == GamePhase::GameOver {
        log::debug!("Ignoring {command:?} after game over");
        return;
    }

    match command {
        Command::MoveLeft => {
            state.player.segment = grid.wrap_segment(state.player.segment as i64 - 1);
        }
        Command::MoveRight => {
            state.player.segment = grid.wrap_segment(state.player.segment as i64 + 1);
        }
        Command::Fire => {
            let segment = state.player.segment;
            let path = PathMotion::new(grid.outer_midpoint(segment), grid.center());
            let bullet_id = state.push_bullet(segment, path);
            state.events.push(GameEvent::BulletFired { bullet_id, segment });
        }
    }
}

/// Advance the game state by one tick
pub fn tick<R: Rng>(state: &mut GameState, grid: &RadialGrid, tuning: &Tuning, rng: &mut R) {
    state.events.clear();

    // Nothing moves after game over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if let Some((segment, path)) = maybe_spawn_enemy(rng, grid, tuning.spawn_chance) {
        let enemy_id = state.push_enemy(segment, path);
        state.events.push(GameEvent::EnemySpawned { enemy_id, segment });
    }

    motion::integrate(state, tuning);
    collision::resolve(state, grid, tuning);
}
