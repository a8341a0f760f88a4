//! Radial Shooter - an arcade shooter on a segmented radial track
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, spawning, motion, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game constants
//! - `input`: Keyboard to command mapping
//! - `session`: A single owned game instance (state + grid + RNG)
//! - `autopilot`: Idle/demo mode player

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use input::command_for_key;
pub use session::Session;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas the track is laid out on (track center sits in the middle)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Track geometry
    pub const SEGMENTS: usize = 16;
    pub const INNER_RADIUS: f32 = 100.0;
    pub const OUTER_RADIUS: f32 = 300.0;

    /// Collision radii
    pub const PLAYER_SIZE: f32 = 15.0;
    pub const ENEMY_SIZE: f32 = 10.0;
    pub const BULLET_RADIUS: f32 = 2.0;

    /// Progress per tick along an entity's path (t runs 0 -> 1)
    pub const ENEMY_SPEED: f32 = 0.005;
    pub const BULLET_SPEED: f32 = 0.05;

    /// Chance per tick that a new enemy appears
    pub const ENEMY_SPAWN_CHANCE: f32 = 0.02;

    pub const STARTING_LIVES: u8 = 3;
    pub const STARTING_LEVEL: u32 = 1;
    pub const KILL_SCORE: u64 = 10;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Linear interpolation that is exact at both ends (t = 0 gives `a`, t = 1 gives `b`)
#[inline]
pub fn lerp_exact(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}
