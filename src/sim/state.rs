//! Game state and core simulation types
//!
//! Only minimal state is stored: the player's segment index, and each moving
//! entity's start/end points plus its progress `t`. Positions are derived.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{STARTING_LEVEL, STARTING_LIVES};
use crate::lerp_exact;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// A straight-line path with normalized progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMotion {
    pub start: Vec2,
    pub end: Vec2,
    /// Progress along the path, 0 at `start`, 1 at `end`
    pub t: f32,
}

impl PathMotion {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, t: 0.0 }
    }

    /// Current position, derived from `t`
    #[inline]
    pub fn position(&self) -> Vec2 {
        lerp_exact(self.start, self.end, self.t)
    }

    /// Reached (or passed) the end of the path
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.t >= 1.0
    }
}

/// An enemy crawling outward along one segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Segment the enemy travels in
    pub segment: usize,
    pub path: PathMotion,
}

impl Enemy {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.path.position()
    }
}

/// A bullet flying from the rim toward the track center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    /// Segment the bullet was fired from
    pub segment: usize,
    pub path: PathMotion,
}

impl Bullet {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.path.position()
    }
}

/// The player token on the outer rim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Segment index, always in [0, N)
    pub segment: usize,
}

/// Something that happened during a tick or a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { enemy_id: u32, segment: usize },
    /// Enemy reached the outer rim without touching the player
    EnemyEscaped { enemy_id: u32 },
    /// Bullet reached the center without hitting anything
    BulletExpired { bullet_id: u32 },
    BulletFired { bullet_id: u32, segment: usize },
    EnemyDestroyed { enemy_id: u32, bullet_id: u32 },
    PlayerHit { enemy_id: u32, lives_left: u8 },
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live enemies, in spawn order (ascending id)
    pub enemies: Vec<Enemy>,
    /// Live bullets, in fire order (ascending id)
    pub bullets: Vec<Bullet>,
    pub score: u64,
    /// Informational only; nothing changes it
    pub level: u32,
    pub lives: u8,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick and any commands since
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh run with `lives` lives
    pub fn new(lives: u8) -> Self {
        Self {
            player: Player::default(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            level: STARTING_LEVEL,
            lives,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add an enemy on `segment` with the given path
    pub fn push_enemy(&mut self, segment: usize, path: PathMotion) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, segment, path });
        id
    }

    /// Add a bullet fired from `segment` with the given path
    pub fn push_bullet(&mut self, segment: usize, path: PathMotion) -> u32 {
        let id = self.next_entity_id();
        self.bullets.push(Bullet { id, segment, path });
        id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}
