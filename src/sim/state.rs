//! Session state and core simulation types
//!
//! The whole game lives in one owned [`Session`] aggregate, passed
//! explicitly to the tick and input-dispatch functions. Nothing is shared,
//! nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionVerdict, Rect};
use super::physics::Bird;
use super::spawn::Spawner;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Main menu
    Menu,
    /// Picking a difficulty before an episode starts
    DifficultySelect,
    /// Cosmetic bird color picker
    ColorSelect,
    /// Persisted top-5 score table
    Leaderboard,
    /// Master volume adjustment
    VolumeAdjust,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, timers suspended
    Paused,
    /// Episode ended on a collision
    GameOver,
}

/// Discrete input surface - no continuous/analog input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    TogglePause,
    /// 1-based difficulty pick (number keys); out-of-range values are ignored
    SelectDifficulty(u8),
    Restart,
    ReturnToMenu,
    Navigate(NavDir),
    Confirm,
    Quit,
}

/// Menu navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDir {
    Up,
    Down,
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    BirdColor,
    Leaderboard,
    Volume,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Play,
        MenuItem::BirdColor,
        MenuItem::Leaderboard,
        MenuItem::Volume,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::BirdColor => "Bird Color",
            MenuItem::Leaderboard => "Leaderboard",
            MenuItem::Volume => "Volume",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Named difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

/// Physics parameters bound to one episode. Immutable once selected;
/// changing difficulty requires a new episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Gravity acceleration (units/tick²)
    pub gravity: f32,
    /// Horizontal scroll speed (units/tick)
    pub scroll_speed: f32,
    /// Vertical gap height between the pipe rectangles
    pub gap: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// 1-based selection index, matching the menu's number keys
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                gravity: 0.15,
                scroll_speed: 2.0,
                gap: 350.0,
            },
            Difficulty::Medium => DifficultyProfile {
                gravity: 0.17,
                scroll_speed: 3.0,
                gap: 300.0,
            },
            Difficulty::Hard => DifficultyProfile {
                gravity: 0.19,
                scroll_speed: 4.0,
                gap: 250.0,
            },
            Difficulty::Expert => DifficultyProfile {
                gravity: 0.21,
                scroll_speed: 5.0,
                gap: 200.0,
            },
        }
    }
}

/// Cosmetic bird tint, selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BirdColor {
    #[default]
    Yellow,
    Blue,
    Red,
    Purple,
    Pink,
}

impl BirdColor {
    pub const ALL: [BirdColor; 5] = [
        BirdColor::Yellow,
        BirdColor::Blue,
        BirdColor::Red,
        BirdColor::Purple,
        BirdColor::Pink,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BirdColor::Yellow => (255, 255, 0),
            BirdColor::Blue => (0, 191, 255),
            BirdColor::Red => (255, 0, 0),
            BirdColor::Purple => (147, 112, 219),
            BirdColor::Pink => (255, 192, 203),
        }
    }
}

/// Cosmetic pipe tint, drawn per obstacle at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeColor {
    Green,
    Blue,
    Red,
    Purple,
    Orange,
    Pink,
}

impl PipeColor {
    pub const ALL: [PipeColor; 6] = [
        PipeColor::Green,
        PipeColor::Blue,
        PipeColor::Red,
        PipeColor::Purple,
        PipeColor::Orange,
        PipeColor::Pink,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PipeColor::Green => (0, 255, 0),
            PipeColor::Blue => (0, 191, 255),
            PipeColor::Red => (255, 0, 0),
            PipeColor::Purple => (147, 112, 219),
            PipeColor::Orange => (255, 165, 0),
            PipeColor::Pink => (255, 192, 203),
        }
    }
}

/// One gated pipe pair: a single logical obstacle with two derived
/// rectangles and one scoring flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (scrolls left each tick)
    pub x: f32,
    /// Top edge of the bottom rectangle; the top rectangle ends `gap` above
    pub gap_y: f32,
    /// Gap height, captured from the profile at spawn
    pub gap: f32,
    /// One-shot scoring flag
    pub scored: bool,
    /// Cosmetic render scale - never affects geometry
    pub scale: f32,
    /// Cosmetic render tint
    pub color: PipeColor,
}

impl Obstacle {
    pub fn new(x: f32, gap_y: f32, gap: f32, scale: f32, color: PipeColor) -> Self {
        Self {
            x,
            gap_y,
            gap,
            scored: false,
            scale,
            color,
        }
    }

    /// Rectangle above the gap
    pub fn top_rect(&self) -> Rect {
        let bottom = self.gap_y - self.gap;
        Rect::new(
            Vec2::new(self.x, bottom - PIPE_LENGTH),
            Vec2::new(self.x + PIPE_WIDTH, bottom),
        )
    }

    /// Rectangle below the gap
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.gap_y),
            Vec2::new(self.x + PIPE_WIDTH, self.gap_y + PIPE_LENGTH),
        )
    }

    /// Horizontal center, used by the scoring zone
    pub fn center_x(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    /// True once the right edge has fully passed the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

/// Events emitted by the session for the driver to act on (audio cues,
/// persistence). Drained once per frame; the core never blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored,
    Collided { verdict: CollisionVerdict },
    EpisodeEnded { score: u32 },
    SettingsChanged,
}

/// Complete session state, exclusively owned by the tick driver
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub bird: Bird,
    /// Active obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Highest score observed this process run
    pub high_score: u32,
    /// Pause-aware elapsed ticks - frozen outside Playing
    pub time_ticks: u64,
    pub spawner: Spawner,
    /// Cosmetic flap animation countdown (ticks)
    pub flap_countdown: u32,
    /// Current flap sprite frame, cycles 0..FLAP_FRAMES
    pub sprite_frame: u8,
    /// Main menu cursor
    pub menu_cursor: usize,
    /// Color picker cursor
    pub color_cursor: usize,
    pub settings: Settings,
    /// Set when the player confirms Quit; read by the driver
    pub quit_requested: bool,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let color_cursor = BirdColor::ALL
            .iter()
            .position(|&c| c == settings.bird_color)
            .unwrap_or(0);
        Self {
            phase: GamePhase::Menu,
            difficulty: Difficulty::default(),
            bird: Bird::new(),
            obstacles: Vec::new(),
            score: 0,
            high_score: 0,
            time_ticks: 0,
            spawner: Spawner::new(),
            flap_countdown: FLAP_INTERVAL_TICKS,
            sprite_frame: 0,
            menu_cursor: 0,
            color_cursor,
            settings,
            quit_requested: false,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Currently highlighted main menu entry
    pub fn menu_selection(&self) -> MenuItem {
        MenuItem::ALL[self.menu_cursor % MenuItem::ALL.len()]
    }

    /// Reset the episode under the current difficulty and enter Playing.
    /// Bird, obstacles, score, and all timers are re-armed together.
    pub fn start_episode(&mut self) {
        self.bird = Bird::new();
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.spawner.reset();
        self.flap_countdown = FLAP_INTERVAL_TICKS;
        self.sprite_frame = 0;
        self.phase = GamePhase::Playing;
        log::info!("episode started ({})", self.difficulty.as_str());
    }

    /// End the episode. Emits `EpisodeEnded` so the driver can persist the
    /// final score; the session keeps running on the in-memory high score
    /// even if that write fails.
    pub fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::EpisodeEnded { score: self.score });
        log::info!("game over at score {}", self.score);
    }

    /// Discard any in-progress episode and return to the menu. Obstacles and
    /// bird state go together so a stale session can never leak into the
    /// next episode.
    pub fn abandon_to_menu(&mut self) {
        self.bird = Bird::new();
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.spawner.reset();
        self.menu_cursor = 0;
        self.phase = GamePhase::Menu;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
