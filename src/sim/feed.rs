//! Read-only view of the world for presentation
//!
//! Everything a renderer or HUD needs, borrowed from the live state. Holding a
//! feed prevents mutation, so a frame can never see a half-applied tick.

use glam::Vec2;

use super::grid::RadialGrid;
use super::state::{Bullet, Enemy, GamePhase, GameState};

#[derive(Debug, Clone, Copy)]
pub struct RenderFeed<'a> {
    pub grid: &'a RadialGrid,
    pub player_segment: usize,
    pub enemies: &'a [Enemy],
    pub bullets: &'a [Bullet],
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    pub game_over: bool,
}

impl<'a> RenderFeed<'a> {
    pub fn new(state: &'a GameState, grid: &'a RadialGrid) -> Self {
        Self {
            grid,
            player_segment: state.player.segment,
            enemies: &state.enemies,
            bullets: &state.bullets,
            score: state.score,
            level: state.level,
            lives: state.lives,
            game_over: state.phase == GamePhase::GameOver,
        }
    }

    /// Player position on the outer rim
    pub fn player_position(&self) -> Vec2 {
        self.grid.outer_midpoint(self.player_segment)
    }

    pub fn enemy_positions(&self) -> impl Iterator<Item = Vec2> + 'a {
        self.enemies.iter().map(Enemy::position)
    }

    pub fn bullet_positions(&self) -> impl Iterator<Item = Vec2> + 'a {
        self.bullets.iter().map(Bullet::position)
    }
}
