//! Placement sound cue
//!
//! Audio decoding and playback live outside this crate. The scene only needs
//! to know whether a cue is ready and to fire it without waiting.

use std::fmt;
use std::path::PathBuf;

/// A short fire-and-forget sound
pub trait AudioCue {
    /// Whether the sound finished loading
    fn is_ready(&self) -> bool;

    /// Whether the sound is currently playing
    fn is_playing(&self) -> bool;

    /// Start playback; must not block
    fn play(&mut self);

    /// Set playback volume (0.0 to 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Resume a suspended output after a user gesture
    fn unlock(&mut self) {}
}

/// Audio could not be set up; sound cues are skipped
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUnavailable {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for AudioUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Audio unavailable ({}): {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for AudioUnavailable {}

/// Cue that is never ready, used when no audio backend is available
#[derive(Debug, Default)]
pub struct SilentCue {
    reason: Option<AudioUnavailable>,
}

impl SilentCue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silent cue standing in for a sound that failed to load
    pub fn unavailable(reason: AudioUnavailable) -> Self {
        log::warn!("{}", reason);
        Self { reason: Some(reason) }
    }

    /// Why the cue is silent, if a load was attempted
    pub fn reason(&self) -> Option<&AudioUnavailable> {
        self.reason.as_ref()
    }
}

impl AudioCue for SilentCue {
    fn is_ready(&self) -> bool {
        false
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn play(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}
}
