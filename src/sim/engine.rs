//! Engine facade: the boundary between the simulation and its adapters
//!
//! Input layers call commands, a display-size provider calls
//! [`GameEngine::initialize_character`] once, and rendering layers read
//! snapshots each frame. The engine is the only writer of game state;
//! readers only ever see fully-updated copies taken between ticks.

use serde::Serialize;

use super::clock::TickClock;
use super::item::{Obstacle, SwagItem};
use super::player::PlayerCharacter;
use super::state::{GamePhase, GameState};
use super::tick::tick;
use crate::consts::SIM_DT;

/// A consistent, read-only view of the simulation between ticks
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: i32,
    pub player: PlayerCharacter,
    pub items: Vec<SwagItem>,
    pub obstacles: Vec<Obstacle>,
}

/// Owns the game state and the tick clock
pub struct GameEngine {
    state: GameState,
    clock: TickClock,
}

impl GameEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            clock: TickClock::new(),
        }
    }

    // --- Commands ---

    /// Establish the player anchor and spawn scheduler. Called once when
    /// the display size becomes available, before gameplay starts.
    pub fn initialize_character(&mut self, screen_width: f32, screen_height: f32) {
        self.state.initialize_character(screen_width, screen_height);
    }

    /// Start a run. Also restarts the tick clock, discarding any previous
    /// loop's partial frame before the new run's first tick.
    pub fn start_game(&mut self) {
        let was_playing = self.state.phase == GamePhase::Playing;
        self.state.start_game();
        if !was_playing {
            self.clock.reset();
        }
    }

    pub fn end_game(&mut self) {
        self.state.end_game();
    }

    pub fn return_to_menu(&mut self) {
        self.state.return_to_menu();
    }

    pub fn restart_game(&mut self) {
        let was_game_over = matches!(self.state.phase, GamePhase::GameOver { .. });
        self.state.restart_game();
        if was_game_over {
            self.clock.reset();
        }
    }

    pub fn add_score(&mut self, points: i32) {
        self.state.add_score(points);
    }

    pub fn reset_score(&mut self) {
        self.state.reset_score();
    }

    pub fn trigger_jump(&mut self) {
        self.state.trigger_jump();
    }

    // --- Driving ---

    /// Fold a frame's elapsed time into fixed ticks; returns the tick count
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.clock.advance(&mut self.state, elapsed)
    }

    /// Run exactly one fixed tick (for lockstep callers and tests)
    pub fn step(&mut self) {
        tick(&mut self.state, SIM_DT);
    }

    // --- Queries ---

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> i32 {
        self.state.score
    }

    pub fn player(&self) -> PlayerCharacter {
        self.state.player
    }

    pub fn active_items(&self) -> Vec<SwagItem> {
        self.state
            .spawner
            .as_ref()
            .map(|spawner| spawner.active_items().to_vec())
            .unwrap_or_default()
    }

    pub fn active_obstacles(&self) -> Vec<Obstacle> {
        self.state
            .spawner
            .as_ref()
            .map(|spawner| spawner.active_obstacles().to_vec())
            .unwrap_or_default()
    }

    /// One consistent view of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            score: self.score(),
            player: self.player(),
            items: self.active_items(),
            obstacles: self.active_obstacles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_SUBSTEPS, SIM_DT};
    use crate::sim::item::SwagItemType;

    fn running_engine() -> GameEngine {
        let mut engine = GameEngine::new(21);
        engine.initialize_character(400.0, 800.0);
        engine.start_game();
        engine
    }

    #[test]
    fn test_start_game_yields_playing_and_zero_score() {
        let mut engine = GameEngine::new(21);
        engine.initialize_character(400.0, 800.0);

        engine.start_game();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);

        engine.end_game();
        engine.start_game();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_end_game_from_menu_is_noop() {
        let mut engine = GameEngine::new(21);
        engine.initialize_character(400.0, 800.0);
        engine.end_game();
        assert_eq!(engine.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_injected_item_scores_exactly_once() {
        let mut engine = running_engine();
        let item = SwagItem::new(SwagItemType::Hoodie, engine.player().pos);
        engine.state.spawner.as_mut().unwrap().items.push(item);

        engine.step();
        assert_eq!(engine.score(), 5);
        assert!(engine.active_items().is_empty());

        engine.step();
        assert_eq!(engine.score(), 5);
    }

    #[test]
    fn test_obstacle_ends_run_through_the_engine() {
        let mut engine = running_engine();
        engine.add_score(2);
        let obstacle = Obstacle::new(engine.player().pos);
        engine.state.spawner.as_mut().unwrap().obstacles.push(obstacle);

        engine.advance(SIM_DT);
        assert_eq!(engine.phase(), GamePhase::GameOver { final_score: 2 });
    }

    #[test]
    fn test_advance_counts_fixed_ticks() {
        let mut engine = running_engine();
        assert_eq!(engine.advance(2.5 * SIM_DT), 2);
        assert_eq!(engine.advance(0.6 * SIM_DT), 1);
        assert_eq!(engine.advance(10.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_start_game_resets_world() {
        let mut engine = running_engine();
        let item = SwagItem::new(SwagItemType::Pen, engine.player().pos);
        engine.state.spawner.as_mut().unwrap().items.push(item);
        engine.step();
        assert_eq!(engine.score(), 1);

        engine.end_game();
        engine.start_game();
        assert_eq!(engine.score(), 0);
        assert!(engine.active_items().is_empty());
        assert!(engine.player().is_grounded());
    }

    #[test]
    fn test_restart_game_keeps_world() {
        let mut engine = running_engine();
        let far_item = SwagItem::new(
            SwagItemType::Pen,
            glam::Vec2::new(380.0, SwagItem::apex_y(800.0, 32.0)),
        );
        engine.state.spawner.as_mut().unwrap().items.push(far_item);
        engine.end_game();

        engine.restart_game();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.active_items().len(), 1);
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let mut engine = running_engine();
        engine.advance(1.0);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.phase, engine.phase());
        assert_eq!(snapshot.score, engine.score());
        assert_eq!(snapshot.player, engine.player());
        assert_eq!(snapshot.items, engine.active_items());
        assert_eq!(snapshot.obstacles, engine.active_obstacles());
    }

    #[test]
    fn test_queries_before_initialization_are_empty() {
        let engine = GameEngine::new(21);
        assert!(engine.active_items().is_empty());
        assert!(engine.active_obstacles().is_empty());
        assert_eq!(engine.phase(), GamePhase::Menu);
    }
}
