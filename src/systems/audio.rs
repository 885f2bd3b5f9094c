//! Placement sound playback
//!
//! The tap sound is read and decoded once at startup. Each placement starts a
//! fresh sink over the cached bytes and detaches the previous one, so a new
//! tap never waits for or cuts off the last.
//!
//! Anything that goes wrong while opening the sound (missing file, unknown
//! format, no output device) degrades to a [`SilentCue`].

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use anatomy_core::{AudioCue, AudioUnavailable, SilentCue};

/// Tap sound played through the default output device
pub struct RodioCue {
    /// Output stream (must be kept alive)
    _stream: OutputStream,
    handle: OutputStreamHandle,
    data: Arc<[u8]>,
    current: Option<Sink>,
    volume: f32,
}

impl RodioCue {
    /// Load and validate the sound at `path`, then open the default device
    pub fn open(path: &Path) -> Result<Self, AudioUnavailable> {
        let unavailable = |reason: String| AudioUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let data: Arc<[u8]> = fs::read(path)
            .map_err(|e| unavailable(format!("Failed to read: {}", e)))?
            .into();
        decode(&data).map_err(|e| unavailable(format!("Failed to decode: {}", e)))?;

        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| unavailable(format!("Failed to open audio output: {}", e)))?;

        log::info!("Loaded tap sound from {} ({} bytes)", path.display(), data.len());
        Ok(Self {
            _stream: stream,
            handle,
            data,
            current: None,
            volume: 1.0,
        })
    }
}

fn decode(data: &Arc<[u8]>) -> Result<Decoder<Cursor<Arc<[u8]>>>, rodio::decoder::DecoderError> {
    Decoder::new(Cursor::new(Arc::clone(data)))
}

impl AudioCue for RodioCue {
    fn is_ready(&self) -> bool {
        true
    }

    fn is_playing(&self) -> bool {
        self.current.as_ref().is_some_and(|sink| !sink.empty() && !sink.is_paused())
    }

    fn play(&mut self) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::warn!("Failed to create audio sink: {}", e);
                return;
            }
        };
        match decode(&self.data) {
            Ok(source) => {
                sink.set_volume(self.volume);
                sink.append(source);
            }
            Err(e) => {
                log::warn!("Failed to decode tap sound: {}", e);
                return;
            }
        }

        if let Some(previous) = self.current.replace(sink) {
            previous.detach();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.current {
            sink.set_volume(self.volume);
        }
    }

    fn unlock(&mut self) {
        if let Some(sink) = &self.current {
            sink.play();
        }
    }
}

/// The placement cue the app runs with
pub enum TapSound {
    Rodio(RodioCue),
    Silent(SilentCue),
}

impl TapSound {
    /// Open the sound at `path`, falling back to silence
    pub fn open(path: &Path) -> Self {
        match RodioCue::open(path) {
            Ok(cue) => TapSound::Rodio(cue),
            Err(reason) => TapSound::Silent(SilentCue::unavailable(reason)),
        }
    }

    /// Why the cue is silent, if it is
    pub fn unavailable(&self) -> Option<&AudioUnavailable> {
        match self {
            TapSound::Rodio(_) => None,
            TapSound::Silent(cue) => cue.reason(),
        }
    }
}

impl AudioCue for TapSound {
    fn is_ready(&self) -> bool {
        match self {
            TapSound::Rodio(cue) => cue.is_ready(),
            TapSound::Silent(cue) => cue.is_ready(),
        }
    }

    fn is_playing(&self) -> bool {
        match self {
            TapSound::Rodio(cue) => cue.is_playing(),
            TapSound::Silent(cue) => cue.is_playing(),
        }
    }

    fn play(&mut self) {
        match self {
            TapSound::Rodio(cue) => cue.play(),
            TapSound::Silent(cue) => cue.play(),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        match self {
            TapSound::Rodio(cue) => cue.set_volume(volume),
            TapSound::Silent(cue) => cue.set_volume(volume),
        }
    }

    fn unlock(&mut self) {
        match self {
            TapSound::Rodio(cue) => cue.unlock(),
            TapSound::Silent(cue) => cue.unlock(),
        }
    }
}
