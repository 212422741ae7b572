//! Render collaborator seam
//!
//! Each frame the driver captures an immutable [`Scene`] snapshot and hands
//! it to a [`RenderSink`]. Geometry plus cosmetic metadata flow out; nothing
//! flows back into the core.

use glam::Vec2;

use crate::consts::BIRD_X;
use crate::sim::collision::Rect;
use crate::sim::state::{BirdColor, GamePhase, PipeColor, Session};

/// Bird draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSprite {
    pub pos: Vec2,
    /// Velocity-derived tilt, degrees. Cosmetic only.
    pub tilt_degrees: f32,
    /// Flap animation frame
    pub frame: u8,
    pub color: BirdColor,
}

/// One obstacle pair's draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSprite {
    pub top: Rect,
    pub bottom: Rect,
    pub color: PipeColor,
    /// Cosmetic scale hint - geometry above is already final
    pub scale: f32,
}

/// Per-frame snapshot of everything the renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub phase: GamePhase,
    pub bird: BirdSprite,
    /// Obstacles in spawn order (oldest first)
    pub obstacles: Vec<ObstacleSprite>,
    pub score: u32,
    pub high_score: u32,
    pub menu_cursor: usize,
    pub color_cursor: usize,
    pub volume: f32,
}

impl Scene {
    pub fn capture(session: &Session) -> Self {
        Self {
            phase: session.phase,
            bird: BirdSprite {
                pos: Vec2::new(BIRD_X, session.bird.y),
                tilt_degrees: session.bird.tilt_degrees(),
                frame: session.sprite_frame,
                color: session.settings.bird_color,
            },
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleSprite {
                    top: o.top_rect(),
                    bottom: o.bottom_rect(),
                    color: o.color,
                    scale: o.scale,
                })
                .collect(),
            score: session.score,
            high_score: session.high_score,
            menu_cursor: session.menu_cursor,
            color_cursor: session.color_cursor,
            volume: session.settings.master_volume,
        }
    }
}

/// Drawing collaborator interface
pub trait RenderSink {
    fn present(&mut self, scene: &Scene);
}
