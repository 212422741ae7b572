//! Audio collaborator seam
//!
//! The core issues fire-and-forget play requests through [`AudioSink`];
//! actual playback lives outside the simulation and its failures are
//! non-fatal by construction - the trait has no way to report one.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flapped
    Jump,
    /// A pair was passed
    Score,
    /// Episode-ending hit
    Collision,
}

/// Playback collaborator interface
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Master volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);
}

/// Discards every request - for tests and muted sessions
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}

    fn set_volume(&mut self, _volume: f32) {}
}

/// Logs each cue instead of playing it - stands in for a real backend in
/// the headless binary
#[derive(Debug)]
pub struct LogAudio {
    volume: f32,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self { volume: 0.5 }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.volume > 0.0 {
            log::debug!("audio cue: {effect:?} (volume {:.1})", self.volume);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
