//! Flap Dash entry point
//!
//! Headless demo driver: no window or audio backend is wired up here, so the
//! binary runs scripted episodes with a small autopilot and reports the
//! resulting leaderboard. Real frontends implement `RenderSink`/`AudioSink`
//! and feed `InputEvent`s from their own event loop.
//!
//! Usage: `flap-dash [seed] [episodes] [realtime]`

use std::time::{Duration, Instant};

use flap_dash::audio::{AudioSink, LogAudio, SoundEffect};
use flap_dash::consts::*;
use flap_dash::persistence::{JsonScoreStore, ScoreStore};
use flap_dash::settings::Settings;
use flap_dash::sim::{GameEvent, GamePhase, InputEvent, Session, handle_input, tick};

/// Save attempts before giving up and continuing on the in-memory score
const SAVE_ATTEMPTS: u32 = 3;

/// Safety cap on total ticks per episode (10 minutes of play)
const MAX_EPISODE_TICKS: u64 = 120 * 600;

/// Owns the session and its collaborators for one process run
struct App {
    session: Session,
    store: JsonScoreStore,
    audio: LogAudio,
}

impl App {
    fn new(seed: u64) -> Self {
        let settings = Settings::load(std::path::Path::new("settings.json"));
        let store = JsonScoreStore::new("scores.json");
        let mut audio = LogAudio::default();
        audio.set_volume(settings.master_volume);

        let mut session = Session::new(seed, settings);
        session.high_score = store.load_scores().top().unwrap_or(0);

        Self {
            session,
            store,
            audio,
        }
    }

    /// Drain session events into collaborator calls
    fn pump_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Flapped => self.audio.play(SoundEffect::Jump),
                GameEvent::Scored => self.audio.play(SoundEffect::Score),
                GameEvent::Collided { .. } => self.audio.play(SoundEffect::Collision),
                GameEvent::EpisodeEnded { score } => self.commit_score(score),
                GameEvent::SettingsChanged => {
                    self.audio.set_volume(self.session.settings.master_volume);
                    if let Err(err) = self
                        .session
                        .settings
                        .save(std::path::Path::new("settings.json"))
                    {
                        log::warn!("failed to save settings: {err}");
                    }
                }
            }
        }
    }

    /// Persist a final score with a bounded retry; a save that keeps failing
    /// is reported and play continues on the in-memory high score.
    fn commit_score(&mut self, score: u32) {
        for attempt in 1..=SAVE_ATTEMPTS {
            match self.store.save_score(score) {
                Ok(()) => return,
                Err(err) if attempt < SAVE_ATTEMPTS => {
                    log::warn!("save attempt {attempt} failed: {err}");
                }
                Err(err) => {
                    log::error!("giving up on saving score {score}: {err}");
                }
            }
        }
    }

    /// Flap whenever the bird sinks below the target line - the middle of
    /// the nearest oncoming gap, or mid-band with nothing ahead.
    fn autopilot(&self) -> Option<InputEvent> {
        let target = self
            .session
            .obstacles
            .iter()
            .find(|o| o.x + PIPE_WIDTH >= BIRD_X - BIRD_WIDTH / 2.0)
            .map(|o| o.gap_y - o.gap / 2.0)
            .unwrap_or(PLAYFIELD_HEIGHT / 2.0);
        (self.session.bird.y > target && self.session.bird.vel >= 0.0).then_some(InputEvent::Jump)
    }

    /// Fixed-timestep loop: accumulate elapsed time, run whole ticks,
    /// bounded by `MAX_SUBSTEPS` per frame. In turbo mode each pass feeds
    /// exactly one timestep so scripted episodes finish immediately.
    fn run(&mut self, episodes: u32, turbo: bool) {
        let mut last = Instant::now();
        let mut accumulator = 0.0f32;
        let mut episode_ticks = 0u64;
        let mut played = 0;

        while !self.session.quit_requested {
            match self.session.phase {
                GamePhase::Playing => {
                    let dt = if turbo {
                        SIM_DT
                    } else {
                        last.elapsed().as_secs_f32().min(0.1)
                    };
                    last = Instant::now();
                    accumulator += dt;

                    let mut substeps = 0;
                    while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        if let Some(event) = self.autopilot() {
                            handle_input(&mut self.session, event);
                        }
                        tick(&mut self.session);
                        accumulator -= SIM_DT;
                        substeps += 1;
                        episode_ticks += 1;

                        if self.session.phase != GamePhase::Playing {
                            break;
                        }
                        if episode_ticks >= MAX_EPISODE_TICKS {
                            log::warn!("episode tick cap reached, ending run");
                            handle_input(&mut self.session, InputEvent::ReturnToMenu);
                            break;
                        }
                    }

                    if !turbo {
                        std::thread::sleep(Duration::from_secs_f32(SIM_DT));
                    }
                }
                GamePhase::GameOver => {
                    played += 1;
                    if played >= episodes {
                        break;
                    }
                    episode_ticks = 0;
                    handle_input(&mut self.session, InputEvent::Restart);
                }
                _ => break,
            }
            self.pump_events();
        }
        self.pump_events();
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xF1AB);
    let episodes: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let realtime = args.next().as_deref() == Some("realtime");

    let mut app = App::new(seed);

    // Menu: Play, then Medium
    handle_input(&mut app.session, InputEvent::Confirm);
    handle_input(&mut app.session, InputEvent::SelectDifficulty(2));

    app.run(episodes, !realtime);

    let record = app.store.load_scores();
    println!("high scores: {:?}", record.high_scores);
    println!("best this run: {}", app.session.high_score);
}
