//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults are the classic
//! values from [`crate::consts`]; a JSON document may override any subset.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::RadialGrid;

/// Errors from loading or validating a tuning document
#[derive(Debug)]
pub enum TuningError {
    /// Could not read the file
    Io(std::io::Error),
    /// Not valid JSON, or a field has the wrong type
    Parse(serde_json::Error),
    /// Parsed fine but a value is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read tuning file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Track ===
    pub segment_count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Track center in canvas coordinates
    pub center: Vec2,

    // === Collision radii ===
    pub player_size: f32,
    pub enemy_size: f32,
    pub bullet_radius: f32,

    // === Motion (progress per tick) ===
    pub enemy_speed: f32,
    pub bullet_speed: f32,

    // === Rules ===
    /// Chance in [0, 1] that an enemy spawns on a tick
    pub spawn_chance: f32,
    pub starting_lives: u8,
    pub kill_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            segment_count: SEGMENTS,
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
            center: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),

            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            bullet_radius: BULLET_RADIUS,

            enemy_speed: ENEMY_SPEED,
            bullet_speed: BULLET_SPEED,

            spawn_chance: ENEMY_SPAWN_CHANCE,
            starting_lives: STARTING_LIVES,
            kill_score: KILL_SCORE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.segment_count < 3 {
            return invalid("segment_count", "need at least 3 segments");
        }
        if !(self.inner_radius > 0.0) {
            return invalid("inner_radius", "must be positive");
        }
        if !(self.outer_radius > self.inner_radius) {
            return invalid("outer_radius", "must be larger than inner_radius");
        }
        for (field, value) in [
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("bullet_radius", self.bullet_radius),
            ("enemy_speed", self.enemy_speed),
            ("bullet_speed", self.bullet_speed),
        ] {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
        }
        if !self.center.is_finite() {
            return invalid("center", "must be finite");
        }
        for (field, size) in [
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("bullet_radius", self.bullet_radius),
        ] {
            if !(size >= 0.0) {
                return invalid(field, "must not be negative");
            }
        }
        if !(self.enemy_speed > 0.0) {
            return invalid("enemy_speed", "must be positive");
        }
        if !(self.bullet_speed > 0.0) {
            return invalid("bullet_speed", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return invalid("spawn_chance", "must be within [0, 1]");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        Ok(())
    }

    /// Build the track grid described by this tuning
    pub fn build_grid(&self) -> RadialGrid {
        RadialGrid::build(
            self.segment_count,
            self.inner_radius,
            self.outer_radius,
            self.center,
        )
    }

    /// Player-vs-enemy hit distance
    #[inline]
    pub fn player_hit_distance(&self) -> f32 {
        self.player_size + self.enemy_size
    }

    /// Bullet-vs-enemy hit distance
    #[inline]
    pub fn bullet_hit_distance(&self) -> f32 {
        self.bullet_radius + self.enemy_size
    }
}
