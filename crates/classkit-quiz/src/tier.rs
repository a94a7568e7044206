//! Difficulty tiers and their operand ranges.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named difficulty level mapping to an inclusive operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Single-digit operands (1-9).
    Beginner,
    /// Double-digit operands (10-99).
    Intermediate,
    /// Triple-digit operands (100-999).
    Advanced,
}

impl Tier {
    /// The inclusive range both operands are drawn from.
    pub fn range(&self) -> RangeInclusive<i64> {
        match self {
            Tier::Beginner => 1..=9,
            Tier::Intermediate => 10..=99,
            Tier::Advanced => 100..=999,
        }
    }

    /// All tiers, in ascending difficulty order.
    pub fn all() -> [Tier; 3] {
        [Tier::Beginner, Tier::Intermediate, Tier::Advanced]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Beginner => write!(f, "beginner"),
            Tier::Intermediate => write!(f, "intermediate"),
            Tier::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" | "easy" => Ok(Tier::Beginner),
            "intermediate" | "medium" => Ok(Tier::Intermediate),
            "advanced" | "hard" => Ok(Tier::Advanced),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}
