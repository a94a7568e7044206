//! Audio collaborator seams.
//!
//! The engines never implement playback; they call these traits and a
//! front-end supplies real implementations. The null implementations keep
//! everything runnable (and testable) headless.

use std::path::Path;

use anyhow::Result;

/// Sound-effect playback.
pub trait AudioSink: Send + Sync {
    /// Play an audio file. Implementations may return once playback has
    /// been started.
    fn play(&self, path: &Path) -> Result<()>;

    /// Stop all playback.
    fn stop(&self);
}

/// Text-to-speech synthesis.
///
/// `speak` is expected to block until the utterance finishes; the
/// `Narrator` runs it on a worker thread so callers never wait on it.
pub trait SpeechSynth: Send + Sync {
    fn speak(&self, text: &str) -> Result<()>;

    /// Request that any in-progress utterance stop. Best-effort.
    fn stop(&self);
}

/// No-op audio sink.
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "null audio: play");
        Ok(())
    }

    fn stop(&self) {}
}

/// No-op speech synth.
pub struct NullSpeech;

impl SpeechSynth for NullSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        tracing::debug!(chars = text.len(), "null speech: speak");
        Ok(())
    }

    fn stop(&self) {}
}
