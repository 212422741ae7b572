//! Vertical physics for the controlled bird
//!
//! Gravity integration with a terminal-velocity cap, an overwrite-style flap
//! impulse, and clamping to the playable band. Boundary contact is returned
//! as a signal, never raised as an error.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;

/// Outcome of one integration step against the vertical band.
///
/// The ceiling is a soft stop (velocity zeroed, episode continues); only the
/// floor is lethal. The asymmetry is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryHit {
    None,
    Ceiling,
    Floor,
}

/// The controlled body. X is fixed at [`BIRD_X`]; only the vertical
/// position and velocity evolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Vertical center position (grows downward)
    pub y: f32,
    /// Vertical velocity (units/tick, positive = falling)
    pub vel: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    /// Bird at rest in the middle of the playfield
    pub fn new() -> Self {
        Self {
            y: PLAYFIELD_HEIGHT / 2.0,
            vel: 0.0,
        }
    }

    /// Apply the flap impulse. Overwrites the current velocity, so rapid
    /// repeated flaps do not stack.
    pub fn flap(&mut self) {
        self.vel = JUMP_IMPULSE;
    }

    /// Advance one tick under the given gravity.
    ///
    /// Velocity accumulates gravity up to [`TERMINAL_VELOCITY`]; position is
    /// clamped to `[TOP_BOUND, BOTTOM_BOUND]`, zeroing velocity at either
    /// end. Returns which boundary (if any) was hit this tick.
    pub fn integrate(&mut self, gravity: f32) -> BoundaryHit {
        self.vel = (self.vel + gravity).min(TERMINAL_VELOCITY);
        self.y += self.vel;

        if self.y < TOP_BOUND {
            self.y = TOP_BOUND;
            self.vel = 0.0;
            BoundaryHit::Ceiling
        } else if self.y >= BOTTOM_BOUND {
            self.y = BOTTOM_BOUND;
            self.vel = 0.0;
            BoundaryHit::Floor
        } else {
            BoundaryHit::None
        }
    }

    /// Axis-aligned bounding box centered on the bird
    pub fn bounds(&self) -> Rect {
        Rect::from_center(Vec2::new(BIRD_X, self.y), BIRD_WIDTH, BIRD_HEIGHT)
    }

    /// Rotation hint for the renderer - tilt follows velocity. Not
    /// physics-relevant.
    pub fn tilt_degrees(&self) -> f32 {
        self.vel * -6.0
    }
}
