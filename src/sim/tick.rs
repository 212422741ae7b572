//! Fixed timestep tick and per-state input dispatch
//!
//! One tick = one fixed simulation step. Gameplay (timers, physics,
//! collision, scoring) advances only while Playing; every other phase leaves
//! the session frozen so pause suspension is exact.

use super::collision::{self, CollisionVerdict};
use super::physics::BoundaryHit;
use super::score::{self, ScoreEvent};
use super::state::{
    BirdColor, Difficulty, GameEvent, GamePhase, InputEvent, MenuItem, NavDir, Session,
};
use crate::consts::*;

/// Route one discrete input event through the current phase's dispatch.
/// Events that make no sense for the phase are ignored without state change.
pub fn handle_input(session: &mut Session, event: InputEvent) {
    match event {
        InputEvent::Quit => {
            session.quit_requested = true;
            return;
        }
        // Any state returns to the menu, discarding episode state atomically
        InputEvent::ReturnToMenu => {
            session.abandon_to_menu();
            return;
        }
        _ => {}
    }

    match session.phase {
        GamePhase::Menu => menu_input(session, event),
        GamePhase::DifficultySelect => difficulty_input(session, event),
        GamePhase::ColorSelect => color_input(session, event),
        GamePhase::Leaderboard => leaderboard_input(session, event),
        GamePhase::VolumeAdjust => volume_input(session, event),
        GamePhase::Playing => playing_input(session, event),
        GamePhase::Paused => paused_input(session, event),
        GamePhase::GameOver => game_over_input(session, event),
    }
}

fn menu_input(session: &mut Session, event: InputEvent) {
    let len = MenuItem::ALL.len();
    match event {
        InputEvent::Navigate(NavDir::Up) => {
            session.menu_cursor = (session.menu_cursor + len - 1) % len;
        }
        InputEvent::Navigate(NavDir::Down) => {
            session.menu_cursor = (session.menu_cursor + 1) % len;
        }
        InputEvent::Confirm => match session.menu_selection() {
            MenuItem::Play => session.phase = GamePhase::DifficultySelect,
            MenuItem::BirdColor => {
                session.color_cursor = BirdColor::ALL
                    .iter()
                    .position(|&c| c == session.settings.bird_color)
                    .unwrap_or(0);
                session.phase = GamePhase::ColorSelect;
            }
            MenuItem::Leaderboard => session.phase = GamePhase::Leaderboard,
            MenuItem::Volume => session.phase = GamePhase::VolumeAdjust,
            MenuItem::Quit => session.quit_requested = true,
        },
        _ => {}
    }
}

fn difficulty_input(session: &mut Session, event: InputEvent) {
    if let InputEvent::SelectDifficulty(index) = event {
        match Difficulty::from_index(index) {
            Some(difficulty) => {
                session.difficulty = difficulty;
                session.start_episode();
            }
            // Invalid index: previous profile retained, no state change
            None => log::debug!("ignoring difficulty index {index}"),
        }
    }
}

fn color_input(session: &mut Session, event: InputEvent) {
    let len = BirdColor::ALL.len();
    match event {
        InputEvent::Navigate(NavDir::Up) => {
            session.color_cursor = (session.color_cursor + len - 1) % len;
        }
        InputEvent::Navigate(NavDir::Down) => {
            session.color_cursor = (session.color_cursor + 1) % len;
        }
        InputEvent::Confirm => {
            session.settings.bird_color = BirdColor::ALL[session.color_cursor];
            session.push_event(GameEvent::SettingsChanged);
            session.phase = GamePhase::Menu;
        }
        _ => {}
    }
}

fn leaderboard_input(session: &mut Session, event: InputEvent) {
    if event == InputEvent::Confirm {
        session.phase = GamePhase::Menu;
    }
}

fn volume_input(session: &mut Session, event: InputEvent) {
    match event {
        InputEvent::Navigate(NavDir::Up) => session.settings.volume_up(),
        InputEvent::Navigate(NavDir::Down) => session.settings.volume_down(),
        InputEvent::Confirm => {
            session.push_event(GameEvent::SettingsChanged);
            session.phase = GamePhase::Menu;
        }
        _ => {}
    }
}

fn playing_input(session: &mut Session, event: InputEvent) {
    match event {
        InputEvent::Jump => {
            session.bird.flap();
            session.push_event(GameEvent::Flapped);
        }
        InputEvent::TogglePause => session.phase = GamePhase::Paused,
        _ => {}
    }
}

fn paused_input(session: &mut Session, event: InputEvent) {
    if event == InputEvent::TogglePause {
        session.phase = GamePhase::Playing;
    }
}

fn game_over_input(session: &mut Session, event: InputEvent) {
    // Final score was already persisted when the episode ended; restart
    // re-uses the same difficulty profile.
    if event == InputEvent::Restart {
        session.start_episode();
    }
}

/// Advance the session by one fixed tick.
///
/// Outside Playing this is a no-op: spawn and animation timers key off the
/// pause-aware tick counter, so a paused session resumes counting exactly
/// where it left off - never a catch-up burst of spawns.
pub fn tick(session: &mut Session) {
    if session.phase != GamePhase::Playing {
        return;
    }

    session.time_ticks += 1;

    // Cosmetic flap animation
    session.flap_countdown -= 1;
    if session.flap_countdown == 0 {
        session.flap_countdown = FLAP_INTERVAL_TICKS;
        session.sprite_frame = (session.sprite_frame + 1) % FLAP_FRAMES;
    }

    let profile = session.difficulty.profile();

    // Spawner
    if let Some(obstacle) =
        session
            .spawner
            .maybe_spawn(session.time_ticks, &profile, &mut session.rng)
    {
        session.obstacles.push(obstacle);
    }

    // Physics
    let boundary = session.bird.integrate(profile.gravity);

    // Scroll and retire obstacles
    for obstacle in &mut session.obstacles {
        obstacle.x -= profile.scroll_speed;
    }
    session.obstacles.retain(|o| !o.is_offscreen());

    // Collision, on post-integration positions. The floor wins over a pipe
    // overlap in the same tick; the ceiling is not lethal.
    let verdict = if boundary == BoundaryHit::Floor {
        CollisionVerdict::Boundary
    } else {
        collision::check(&session.bird.bounds(), &session.obstacles)
    };
    if verdict != CollisionVerdict::None {
        session.push_event(GameEvent::Collided { verdict });
        session.enter_game_over();
        return;
    }

    // Scoring
    if score::update(&mut session.obstacles, BIRD_X, profile.scroll_speed) == ScoreEvent::Scored {
        session.score += 1;
        if session.score > session.high_score {
            session.high_score = session.score;
        }
        session.push_event(GameEvent::Scored);
    }
}
