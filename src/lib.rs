//! Swag Dash - a side-scrolling swag-collecting runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, spawning, collisions)
//!
//! Rendering, UI screens, platform input capture, and high-score persistence
//! are external collaborators: they read snapshots from [`sim::GameEngine`]
//! and issue commands through it.

pub mod sim;

pub use sim::{GameEngine, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player sprite size (16x22 pixels at 4x pixel scale)
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 88.0;
    /// Horizontal anchor as a fraction of screen width
    pub const PLAYER_ANCHOR_RATIO: f32 = 0.15;

    /// Run animation
    pub const ANIMATION_FRAME_DURATION: f32 = 0.15;
    pub const RUNNING_FRAME_COUNT: u32 = 4;

    /// The road occupies the bottom 20% of the screen
    pub const ROAD_HEIGHT_RATIO: f32 = 0.2;

    /// Jump physics (screen coordinates, +y is down)
    pub const JUMP_VELOCITY: f32 = -600.0;
    pub const GRAVITY: f32 = 1800.0;

    /// World scroll speed (items and obstacles move left)
    pub const SCROLL_SPEED: f32 = 200.0;

    /// Collectible size
    pub const ITEM_SIZE: f32 = 32.0;
    /// Obstacle size (12x12 pixels at 4x pixel scale)
    pub const OBSTACLE_SIZE: f32 = 48.0;

    /// Item spawn timing (seconds between spawns)
    pub const MIN_SPAWN_INTERVAL: f32 = 1.5;
    pub const MAX_SPAWN_INTERVAL: f32 = 3.0;
    /// Obstacle spawn timing
    pub const MIN_OBSTACLE_INTERVAL: f32 = 4.0;
    pub const MAX_OBSTACLE_INTERVAL: f32 = 7.0;

    /// Probability that a spawn rolls a rare item
    pub const RARE_ITEM_PROBABILITY: f64 = 0.15;

    /// Entities spawn this many pixels past the right screen edge
    pub const SPAWN_OFFSET_X: f32 = 50.0;
}

/// Ground level Y for a given screen height (top of the road)
#[inline]
pub fn ground_level(screen_height: f32) -> f32 {
    screen_height * (1.0 - consts::ROAD_HEIGHT_RATIO)
}

/// Y position of an entity of the given height standing on the road
#[inline]
pub fn grounded_y(screen_height: f32, entity_height: f32) -> f32 {
    ground_level(screen_height) - entity_height
}
