//! Motion integration along fixed paths
//!
//! Advances progress only. Expired entities stay in place; collision
//! resolution removes them once the tick's hit checks have seen them.

use super::state::{GameState, PathMotion};
use crate::tuning::Tuning;

impl PathMotion {
    /// Step `t` forward by `speed_per_tick`
    #[inline]
    pub fn advance(&mut self, speed_per_tick: f32) {
        self.t += speed_per_tick;
    }

    /// Copy of this path stepped forward by `speed_per_tick`
    #[inline]
    pub fn advanced(mut self, speed_per_tick: f32) -> Self {
        self.advance(speed_per_tick);
        self
    }
}

/// Advance every enemy and bullet by its per-tick speed
pub fn integrate(state: &mut GameState, tuning: &Tuning) {
    for enemy in &mut state.enemies {
        enemy.path.advance(tuning.enemy_speed);
    }
    for bullet in &mut state.bullets {
        bullet.path.advance(tuning.bullet_speed);
    }
}
