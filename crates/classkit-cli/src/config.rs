//! CLI configuration loaded from `classkit.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use classkit_quiz::{QuizConfig, RankConvention};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "classkit.toml";

/// Top-level config file shape. Every section is optional; missing
/// sections fall back to built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizSection,
    #[serde(default)]
    pub roster: RosterSection,
    #[serde(default)]
    pub jokes: JokesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizSection {
    pub max_questions: Option<u32>,
    pub max_lives: Option<u32>,
    pub first_attempt_points: Option<u32>,
    pub second_attempt_points: Option<u32>,
    pub rank_convention: Option<RankConvention>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterSection {
    #[serde(default = "default_roster_file")]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JokesSection {
    #[serde(default = "default_jokes_file")]
    pub file: PathBuf,
}

fn default_roster_file() -> PathBuf {
    PathBuf::from("students.txt")
}

fn default_jokes_file() -> PathBuf {
    PathBuf::from("jokes.txt")
}

impl Default for RosterSection {
    fn default() -> Self {
        Self {
            file: default_roster_file(),
        }
    }
}

impl Default for JokesSection {
    fn default() -> Self {
        Self {
            file: default_jokes_file(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from `./classkit.toml` when
    /// present. An explicit path that cannot be read is an error; the
    /// implicit default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Session parameters assembled from the quiz section.
    pub fn quiz_config(&self) -> QuizConfig {
        let defaults = QuizConfig::default();
        QuizConfig {
            max_questions: self.quiz.max_questions.unwrap_or(defaults.max_questions),
            max_lives: self.quiz.max_lives.unwrap_or(defaults.max_lives),
            first_attempt_points: self
                .quiz
                .first_attempt_points
                .unwrap_or(defaults.first_attempt_points),
            second_attempt_points: self
                .quiz
                .second_attempt_points
                .unwrap_or(defaults.second_attempt_points),
            rank_convention: self.quiz.rank_convention.unwrap_or_default(),
        }
    }
}
