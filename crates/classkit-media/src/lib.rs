//! classkit-media — Joke source, audio collaborator seams, and narration.
//!
//! The audio subsystem itself is out of scope: this crate defines the
//! traits a playback/speech implementation plugs into, null implementations
//! for headless use, and the background narration worker that keeps a
//! front-end responsive while text is being spoken.

pub mod audio;
pub mod jokes;
pub mod narrator;

pub use audio::{AudioSink, NullAudio, NullSpeech, SpeechSynth};
pub use jokes::{Joke, JokeBook};
pub use narrator::{NarrationHandle, Narrator};
