//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - RNG passed in by the caller
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod feed;
pub mod grid;
pub mod motion;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, resolve};
pub use feed::RenderFeed;
pub use grid::{RadialGrid, SpokePoint};
pub use motion::integrate;
pub use spawner::maybe_spawn_enemy;
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, PathMotion, Player};
pub use tick::{Command, apply_command, tick};
