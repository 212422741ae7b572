//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No I/O, rendering, or platform dependencies

pub mod collision;
pub mod physics;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionVerdict, Rect};
pub use physics::{Bird, BoundaryHit};
pub use score::ScoreEvent;
pub use spawn::Spawner;
pub use state::{
    BirdColor, Difficulty, DifficultyProfile, GameEvent, GamePhase, InputEvent, MenuItem, NavDir,
    Obstacle, PipeColor, Session,
};
pub use tick::{handle_input, tick};
