//! classkit-quiz — Arithmetic quiz scoring engine.
//!
//! This crate implements the quiz logic core: problem generation per
//! difficulty tier, the two-attempt scoring and life state machine, and
//! final rank calculation. It has no UI dependency; a front-end poses the
//! problems and renders the structured outcomes.

pub mod error;
pub mod problem;
pub mod rank;
pub mod report;
pub mod session;
pub mod tier;

pub use error::QuizError;
pub use problem::{Op, Problem};
pub use rank::{Rank, RankConvention};
pub use report::QuizReport;
pub use session::{Outcome, QuizConfig, QuizSession};
pub use tier::Tier;
