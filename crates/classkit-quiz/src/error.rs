//! Quiz engine error types.

use thiserror::Error;

/// Errors from driving a quiz session.
///
/// Invalid answer input is deliberately *not* an error: it is a recoverable
/// outcome (`Outcome::Invalid`) that leaves the session untouched.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The session already ended; no further problems can be posed.
    #[error("quiz session is finished")]
    Finished,

    /// An answer was submitted with no problem currently posed.
    #[error("no problem is currently posed")]
    NoProblemPosed,
}
