//! Flap Dash - a side-scrolling flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `highscores`: Bounded descending leaderboard record
//! - `persistence`: Score storage gateway (JSON file backed)
//! - `settings`: Player preferences (volume, bird color)
//! - `audio` / `render`: Collaborator seams for sound and drawing

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::ScoreRecord;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions - y grows downward (screen coordinates)
    pub const PLAYFIELD_WIDTH: f32 = 350.0;
    pub const PLAYFIELD_HEIGHT: f32 = 622.0;

    /// Vertical band the bird's center may occupy. The ceiling is a soft
    /// stop; only the floor ends the episode.
    pub const TOP_BOUND: f32 = 5.0;
    pub const BOTTOM_BOUND: f32 = 550.0;

    /// Bird geometry - x never changes, only y
    pub const BIRD_X: f32 = 67.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Terminal fall speed (units/tick)
    pub const TERMINAL_VELOCITY: f32 = 15.0;
    /// Flap impulse - overwrites velocity, repeated flaps never stack
    pub const JUMP_IMPULSE: f32 = -7.0;

    /// Pipe geometry. `PIPE_LENGTH` extends each rectangle past the gap edge
    /// far enough to cover the whole playable band.
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_LENGTH: f32 = 640.0;
    /// X where new pairs enter, just off the right edge
    pub const SPAWN_X: f32 = 467.0;

    /// Spawn cadence (1200 ms at 120 Hz) - independent of difficulty
    pub const SPAWN_INTERVAL_TICKS: u64 = 144;
    /// Flap sprite frame cadence (150 ms at 120 Hz), cosmetic only
    pub const FLAP_INTERVAL_TICKS: u32 = 18;
    /// Number of flap sprite frames
    pub const FLAP_FRAMES: u8 = 3;

    /// Allowed gap anchors (top edge of the bottom pipe rectangle)
    pub const GAP_ANCHORS: [f32; 5] = [200.0, 250.0, 300.0, 350.0, 400.0];
    /// Cosmetic pipe scales - never affect collision geometry
    pub const PIPE_SCALES: [f32; 3] = [0.8, 1.0, 1.2];

    /// Scoring zone base half-width; the active scroll speed is added so the
    /// zone cannot be skipped between ticks at higher difficulties
    pub const SCORE_ZONE_HALF_WIDTH: f32 = 10.0;
}
