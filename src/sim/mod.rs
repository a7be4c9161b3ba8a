//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The only writer of game state is the tick sequence; adapters read
//! snapshots between ticks and issue commands through [`GameEngine`].

pub mod clock;
pub mod collision;
pub mod engine;
pub mod item;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::TickClock;
pub use collision::{
    Collidable, Hitbox, find_all_collisions, find_first_collision, has_any_collision,
};
pub use engine::{GameEngine, Snapshot};
pub use item::{ItemRarity, Obstacle, SwagItem, SwagItemType};
pub use player::PlayerCharacter;
pub use spawn::SpawnScheduler;
pub use state::{GamePhase, GameState};
pub use tick::tick;
