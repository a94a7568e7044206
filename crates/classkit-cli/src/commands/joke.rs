//! `classkit joke`: narrate a random joke.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use classkit_media::{AudioSink, JokeBook, Narrator, NullAudio, NullSpeech, SpeechSynth};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

const LAUGH_TRACK: &str = "laughing.mp3";

pub fn execute(jokes: Option<PathBuf>, seed: Option<u64>, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let path = jokes.unwrap_or(config.jokes.file);
    let book = JokeBook::load(&path)?;

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let Some(joke) = book.random(&mut rng) else {
        println!("No jokes in {}", path.display());
        return Ok(());
    };

    // Headless audio; a desktop front-end swaps in real implementations.
    let synth: Arc<dyn SpeechSynth> = Arc::new(NullSpeech);
    let audio = NullAudio;
    let mut narrator = Narrator::new(synth);

    println!("{}", joke.setup);
    narrator.narrate(&joke.setup).wait();

    println!("{}", joke.punchline);
    narrator.narrate(&joke.punchline).wait();

    // The laugh plays only after the punchline has been spoken.
    if let Err(e) = audio.play(Path::new(LAUGH_TRACK)) {
        tracing::warn!("laugh track failed: {e:#}");
    }

    Ok(())
}
