//! Arithmetic problem generation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// The two supported operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Sub,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "+"),
            Op::Sub => write!(f, "-"),
        }
    }
}

/// A single arithmetic problem with its precomputed answer.
///
/// Invariant: `answer` equals `left + right` or `left - right` exactly,
/// and for subtraction `left >= right`, so the answer is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub left: i64,
    pub right: i64,
    pub op: Op,
    pub answer: i64,
}

impl Problem {
    /// Generate a random problem for a tier.
    ///
    /// Operands are drawn independently and uniformly from the tier range,
    /// the operator uniformly from {+, -}. Subtraction operands are swapped
    /// when needed to keep the result non-negative.
    pub fn generate<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Problem {
        let range = tier.range();
        let mut left = rng.gen_range(range.clone());
        let mut right = rng.gen_range(range);
        let op = if rng.gen_bool(0.5) { Op::Add } else { Op::Sub };

        if op == Op::Sub && left < right {
            std::mem::swap(&mut left, &mut right);
        }

        let answer = match op {
            Op::Add => left + right,
            Op::Sub => left - right,
        };

        Problem {
            left,
            right,
            op,
            answer,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
