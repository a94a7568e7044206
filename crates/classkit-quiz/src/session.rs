//! The quiz session state machine.
//!
//! A session walks `Ready -> Posed -> {Posed | Ready} -> ... -> Finished`:
//! posing a problem moves to `Posed`, a wrong answer with attempts left
//! stays on the same problem, and a solved problem (answered correctly or
//! missed twice) returns to `Ready` until the next pose. The session
//! finishes when lives run out or the question limit is reached, and
//! `Finished` is terminal.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::problem::Problem;
use crate::rank::{Rank, RankConvention};
use crate::tier::Tier;

pub const ATTEMPTS_PER_PROBLEM: u32 = 2;

/// Tunable session parameters. Defaults match the original game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per session.
    pub max_questions: u32,
    /// Starting lives.
    pub max_lives: u32,
    /// Points for a first-attempt correct answer.
    pub first_attempt_points: u32,
    /// Points for a second-attempt correct answer.
    pub second_attempt_points: u32,
    /// Which rank threshold convention to apply.
    #[serde(default)]
    pub rank_convention: RankConvention,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: 10,
            max_lives: 5,
            first_attempt_points: 10,
            second_attempt_points: 5,
            rank_convention: RankConvention::default(),
        }
    }
}

/// Structured result of one answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not an integer. Nothing changed; re-prompt without penalty.
    Invalid,
    /// Correct answer. `attempt` is 1 or 2.
    Correct { points: u32, attempt: u32 },
    /// Wrong, but attempts remain on this problem; re-prompt.
    Retry { attempts_left: u32 },
    /// Wrong twice: one life lost, the problem advances.
    Missed { answer: i64, lives_left: u32 },
}

impl Outcome {
    /// True when the current problem is done with (right or wrong) and the
    /// caller should pose the next one.
    pub fn solved(&self) -> bool {
        matches!(self, Outcome::Correct { .. } | Outcome::Missed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ready,
    Posed,
    Finished,
}

/// One quiz play-through for a chosen tier.
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    tier: Tier,
    score: u32,
    lives: u32,
    attempted: u32,
    attempts_left: u32,
    current: Option<Problem>,
    phase: Phase,
}

impl QuizSession {
    pub fn new(tier: Tier, config: QuizConfig) -> Self {
        let lives = config.max_lives;
        Self {
            config,
            tier,
            score: 0,
            lives,
            attempted: 0,
            attempts_left: ATTEMPTS_PER_PROBLEM,
            current: None,
            phase: Phase::Ready,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Questions fully dealt with so far (solved or missed twice).
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Generate and pose the next problem, resetting the attempt counter.
    pub fn pose<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Problem, QuizError> {
        match self.phase {
            Phase::Finished => Err(QuizError::Finished),
            Phase::Posed | Phase::Ready => {
                let problem = Problem::generate(self.tier, rng);
                self.current = Some(problem);
                self.attempts_left = ATTEMPTS_PER_PROBLEM;
                self.phase = Phase::Posed;
                Ok(problem)
            }
        }
    }

    /// Submit an answer for the posed problem.
    ///
    /// Unparseable input never consumes an attempt and never advances the
    /// question; the session is exactly as it was before the call.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, QuizError> {
        if self.phase == Phase::Finished {
            return Err(QuizError::Finished);
        }
        let problem = self.current.ok_or(QuizError::NoProblemPosed)?;

        let Ok(guess) = input.trim().parse::<i64>() else {
            return Ok(Outcome::Invalid);
        };

        if guess == problem.answer {
            let (points, attempt) = if self.attempts_left == ATTEMPTS_PER_PROBLEM {
                (self.config.first_attempt_points, 1)
            } else {
                (self.config.second_attempt_points, 2)
            };
            self.score += points;
            self.finish_problem();
            return Ok(Outcome::Correct { points, attempt });
        }

        self.attempts_left -= 1;
        if self.attempts_left > 0 {
            return Ok(Outcome::Retry {
                attempts_left: self.attempts_left,
            });
        }

        // Second miss: the problem is spent and costs a life.
        self.lives -= 1;
        self.finish_problem();
        Ok(Outcome::Missed {
            answer: problem.answer,
            lives_left: self.lives,
        })
    }

    fn finish_problem(&mut self) {
        self.attempted += 1;
        self.current = None;
        if self.lives == 0 || self.attempted >= self.config.max_questions {
            self.phase = Phase::Finished;
            tracing::debug!(
                score = self.score,
                lives = self.lives,
                attempted = self.attempted,
                "quiz session finished"
            );
        } else {
            self.phase = Phase::Ready;
        }
    }

    /// The final rank. Only available once the session has finished.
    pub fn rank(&self) -> Option<Rank> {
        self.is_finished().then(|| {
            Rank::calculate(
                self.score,
                self.config.max_questions,
                self.config.rank_convention,
            )
        })
    }
}
