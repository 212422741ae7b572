//! Pass-through scoring
//!
//! A horizontal zone is centered on the bird's fixed x position; its
//! half-width grows with scroll speed so a pair's center cannot step over
//! the zone between ticks at higher difficulties. Each pair scores exactly
//! once via its one-shot flag - a pair is one logical obstacle, not two
//! rectangles.

use super::state::Obstacle;
use crate::consts::SCORE_ZONE_HALF_WIDTH;

/// Outcome of one scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    None,
    Scored,
}

/// Mark any unscored obstacle whose center is inside the zone this tick.
pub fn update(obstacles: &mut [Obstacle], entity_x: f32, scroll_speed: f32) -> ScoreEvent {
    let half_width = SCORE_ZONE_HALF_WIDTH + scroll_speed;
    let mut event = ScoreEvent::None;

    for obstacle in obstacles.iter_mut() {
        if !obstacle.scored && (obstacle.center_x() - entity_x).abs() <= half_width {
            obstacle.scored = true;
            event = ScoreEvent::Scored;
        }
    }

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BIRD_X, PIPE_WIDTH};
    use crate::sim::state::{Obstacle, PipeColor};

    fn pair_centered_at(center_x: f32) -> Obstacle {
        Obstacle::new(center_x - PIPE_WIDTH / 2.0, 300.0, 300.0, 1.0, PipeColor::Green)
    }

    #[test]
    fn test_scores_once_inside_zone() {
        let mut obstacles = vec![pair_centered_at(BIRD_X)];
        assert_eq!(update(&mut obstacles, BIRD_X, 3.0), ScoreEvent::Scored);
        assert!(obstacles[0].scored);
    }

    #[test]
    fn test_never_scores_twice_while_dwelling() {
        // Walk the pair through the whole zone one unit at a time; the flag
        // must hold the count to exactly one despite many in-zone ticks.
        let mut obstacles = vec![pair_centered_at(BIRD_X + 20.0)];
        let mut scored_events = 0;
        for _ in 0..40 {
            obstacles[0].x -= 1.0;
            if update(&mut obstacles, BIRD_X, 3.0) == ScoreEvent::Scored {
                scored_events += 1;
            }
        }
        assert_eq!(scored_events, 1);
    }

    #[test]
    fn test_outside_zone_is_ignored() {
        let mut obstacles = vec![pair_centered_at(BIRD_X + 100.0)];
        assert_eq!(update(&mut obstacles, BIRD_X, 5.0), ScoreEvent::None);
        assert!(!obstacles[0].scored);
    }

    #[test]
    fn test_zone_widens_with_scroll_speed() {
        // Center 17 units out: outside the Easy zone (10+2) but inside the
        // Expert zone (10+5).
        let mut easy = vec![pair_centered_at(BIRD_X + 17.0)];
        let mut expert = vec![pair_centered_at(BIRD_X + 17.0)];
        assert_eq!(update(&mut easy, BIRD_X, 2.0), ScoreEvent::None);
        assert_eq!(update(&mut expert, BIRD_X, 5.0), ScoreEvent::Scored);
    }

    #[test]
    fn test_fastest_scroll_cannot_skip_zone() {
        // At the widest step (Expert, 5/tick) the zone spans 30 units, so
        // stepping the center by scroll speed always lands inside at least
        // once.
        let mut obstacles = vec![pair_centered_at(BIRD_X + 60.0)];
        let mut hits = 0;
        while obstacles[0].center_x() > BIRD_X - 60.0 {
            obstacles[0].x -= 5.0;
            if update(&mut obstacles, BIRD_X, 5.0) == ScoreEvent::Scored {
                hits += 1;
            }
        }
        assert_eq!(hits, 1);
    }
}
