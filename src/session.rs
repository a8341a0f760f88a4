//! One running game
//!
//! Owns the state, the grid built from the tuning, and the seeded RNG, so the
//! host only has to forward commands and call `tick` once per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::{
    Command, GameEvent, GameState, RadialGrid, RenderFeed, apply_command, tick,
};
use crate::tuning::{Tuning, TuningError};

pub struct Session {
    pub state: GameState,
    grid: RadialGrid,
    tuning: Tuning,
    rng: Pcg32,
    seed: u64,
}

impl Session {
    /// New run with validated tuning
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(tuning.starting_lives),
            grid: tuning.build_grid(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        })
    }

    /// New run with the classic constants
    pub fn with_defaults(seed: u64) -> Self {
        let tuning = Tuning::default();
        Self {
            state: GameState::new(tuning.starting_lives),
            grid: tuning.build_grid(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Start over with a new seed, keeping the tuning
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(self.tuning.starting_lives);
        self.rng = Pcg32::seed_from_u64(seed);
        self.seed = seed;
        log::info!("Session restarted with seed: {}", seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &RadialGrid {
        &self.grid
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Apply a player command right away
    pub fn command(&mut self, command: Command) {
        let before = self.state.events.len();
        apply_command(&mut self.state, &self.grid, command);
        for event in &self.state.events[before..] {
            log_event(event);
        }
    }

    /// Run one simulation tick and log what happened
    pub fn tick(&mut self) {
        tick(&mut self.state, &self.grid, &self.tuning, &mut self.rng);
        for event in &self.state.events {
            log_event(event);
        }
    }

    /// Events from the latest tick, plus those from commands applied since
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn feed(&self) -> RenderFeed<'_> {
        RenderFeed::new(&self.state, &self.grid)
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerHit { lives_left, .. } => {
            log::info!("Player hit, {} lives left", lives_left);
        }
        GameEvent::GameOver { score } => {
            log::info!("Game over, final score {}", score);
        }
        other => log::debug!("{:?}", other),
    }
}
