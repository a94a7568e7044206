//! Riddle-style joke source backed by a flat text file.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

/// A two-part joke: a question setup and its punchline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// All jokes loaded from a jokes file.
///
/// File format: one joke per line, `setup?punchline`. The split is on the
/// *last* question mark so setups may themselves contain one. Lines with
/// no question mark are skipped.
#[derive(Debug, Default)]
pub struct JokeBook {
    jokes: Vec<Joke>,
}

impl JokeBook {
    /// Load a joke book from a file.
    pub fn load(path: &Path) -> Result<JokeBook> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read jokes file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parse joke lines from text.
    pub fn parse(content: &str) -> JokeBook {
        let mut jokes = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.rsplit_once('?') {
                Some((setup, punchline)) if !punchline.trim().is_empty() => {
                    jokes.push(Joke {
                        setup: format!("{}?", setup.trim()),
                        punchline: punchline.trim().to_string(),
                    });
                }
                _ => {
                    tracing::warn!(line, "skipping joke line without setup?punchline shape");
                }
            }
        }
        JokeBook { jokes }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// A uniformly random joke, or `None` if the book is empty.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Joke> {
        if self.jokes.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.jokes.len());
        Some(&self.jokes[idx])
    }
}
