//! Final rank calculation.
//!
//! Two threshold conventions exist in the wild for this game: one converts
//! the score to a percentage of the maximum before thresholding, the other
//! thresholds the raw score directly. Both are supported; callers pick one
//! via `RankConvention` and must use it consistently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final rank awarded at the end of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    #[serde(rename = "a+")]
    APlus,
    A,
    B,
    C,
    F,
}

/// Which value the rank thresholds apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankConvention {
    /// Threshold `score / (max_questions * 10) * 100`. Stays correct when
    /// the question count is reconfigured.
    #[default]
    PercentOfMax,
    /// Threshold the raw score directly against 90/80/70/60.
    RawScore,
}

impl Rank {
    /// Compute the rank for a final score.
    pub fn calculate(score: u32, max_questions: u32, convention: RankConvention) -> Rank {
        let value = match convention {
            RankConvention::PercentOfMax => {
                let max_score = max_questions.max(1) * 10;
                (score as f64 / max_score as f64) * 100.0
            }
            RankConvention::RawScore => score as f64,
        };

        if value >= 90.0 {
            Rank::APlus
        } else if value >= 80.0 {
            Rank::A
        } else if value >= 70.0 {
            Rank::B
        } else if value >= 60.0 {
            Rank::C
        } else {
            Rank::F
        }
    }

    /// Short motivational caption shown alongside the rank.
    pub fn caption(&self) -> &'static str {
        match self {
            Rank::APlus => "Outstanding!",
            Rank::A => "Excellent!",
            Rank::B => "Very Good",
            Rank::C => "Good",
            Rank::F => "Try Again",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::APlus => write!(f, "A+"),
            Rank::A => write!(f, "A"),
            Rank::B => write!(f, "B"),
            Rank::C => write!(f, "C"),
            Rank::F => write!(f, "F"),
        }
    }
}
