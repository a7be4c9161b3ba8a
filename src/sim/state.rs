//! Game state machine and the simulation aggregate
//!
//! `GamePhase` is the top-level tagged union gating every mutation: physics,
//! spawning, and scoring only advance while `Playing`. All transitions are
//! total functions over the current state; an illegal call is a silent
//! no-op, never an error.

use serde::{Deserialize, Serialize};

use super::player::PlayerCharacter;
use super::spawn::SpawnScheduler;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, waiting for a run to start
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; carries the score the run finished with
    GameOver { final_score: i32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: i32,
    pub player: PlayerCharacter,
    /// Created once the display size is known
    pub spawner: Option<SpawnScheduler>,
    /// Cached display size from `initialize_character`
    pub screen: Option<(f32, f32)>,
    /// Gameplay ticks processed this run
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            player: PlayerCharacter::default(),
            spawner: None,
            screen: None,
            time_ticks: 0,
        }
    }

    /// Anchor the player and create the spawn scheduler once the display
    /// size is known. Non-positive or non-finite dimensions are rejected;
    /// gameplay physics has no meaning until this has been called.
    pub fn initialize_character(&mut self, screen_width: f32, screen_height: f32) {
        if !(screen_width.is_finite() && screen_height.is_finite())
            || screen_width <= 0.0
            || screen_height <= 0.0
        {
            log::warn!("rejecting display size {screen_width}x{screen_height}");
            return;
        }

        self.screen = Some((screen_width, screen_height));
        self.player = PlayerCharacter::at_start(screen_width, screen_height);
        self.spawner = Some(SpawnScheduler::new(screen_width, screen_height, self.seed));
    }

    /// Begin a run. Legal from Menu or GameOver; no-op while already
    /// Playing. Resets the score, the player, and the spawn scheduler.
    pub fn start_game(&mut self) {
        match self.phase {
            GamePhase::Menu | GamePhase::GameOver { .. } => {
                self.score = 0;
                self.time_ticks = 0;
                self.reset_player();
                if let Some(spawner) = self.spawner.as_mut() {
                    spawner.reset();
                }
                self.phase = GamePhase::Playing;
                log::info!("run started (seed {})", self.seed);
            }
            GamePhase::Playing => {}
        }
    }

    /// End the current run, capturing the score. Legal only while Playing.
    pub fn end_game(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver {
                final_score: self.score,
            };
            log::info!("run ended with score {}", self.score);
        }
    }

    /// Back to the menu. Legal only from GameOver.
    pub fn return_to_menu(&mut self) {
        if matches!(self.phase, GamePhase::GameOver { .. }) {
            self.phase = GamePhase::Menu;
        }
    }

    /// Jump straight into a new run from GameOver. Resets the score only;
    /// player and world state carry over from where the run ended.
    pub fn restart_game(&mut self) {
        if matches!(self.phase, GamePhase::GameOver { .. }) {
            self.score = 0;
            self.phase = GamePhase::Playing;
        }
    }

    /// Score accrual, gated on Playing
    pub fn add_score(&mut self, points: i32) {
        if self.phase == GamePhase::Playing {
            self.score += points;
        }
    }

    /// Administrative zeroing, not phase-gated
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Jump command, gated on Playing
    pub fn trigger_jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.player = self.player.initiate_jump();
        }
    }

    /// Default player, re-anchored when the display size is already known
    fn reset_player(&mut self) {
        self.player = match self.screen {
            Some((width, height)) => PlayerCharacter::at_start(width, height),
            None => PlayerCharacter::default(),
        };
    }
}
