//! Quiz session summaries with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rank::Rank;
use crate::session::QuizSession;
use crate::tier::Tier;

/// A finished session, flattened for storage and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Difficulty played.
    pub tier: Tier,
    /// Final score.
    pub score: u32,
    /// Maximum achievable score.
    pub max_score: u32,
    /// Questions dealt with before the session ended.
    pub questions_attempted: u32,
    /// Lives remaining at the end (0 on a game-over).
    pub lives_left: u32,
    /// Final rank.
    pub rank: Rank,
}

impl QuizReport {
    /// Build a report from a finished session. Returns `None` while the
    /// session is still running, matching `QuizSession::rank`.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let rank = session.rank()?;
        Some(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            tier: session.tier(),
            score: session.score(),
            max_score: session.config().max_questions * session.config().first_attempt_points,
            questions_attempted: session.attempted(),
            lives_left: session.lives(),
            rank,
        })
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize quiz report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write quiz report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read quiz report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse quiz report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuizConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn finished_session() -> QuizSession {
        let mut s = QuizSession::new(Tier::Beginner, QuizConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        while !s.is_finished() {
            let p = s.pose(&mut rng).unwrap();
            s.submit(&p.answer.to_string()).unwrap();
        }
        s
    }

    #[test]
    fn report_requires_finished_session() {
        let s = QuizSession::new(Tier::Beginner, QuizConfig::default());
        assert!(QuizReport::from_session(&s).is_none());
        assert!(QuizReport::from_session(&finished_session()).is_some());
    }

    #[test]
    fn report_captures_session_totals() {
        let s = finished_session();
        let report = QuizReport::from_session(&s).unwrap();
        assert_eq!(report.score, 100);
        assert_eq!(report.max_score, 100);
        assert_eq!(report.questions_attempted, 10);
        assert_eq!(report.lives_left, 5);
        assert_eq!(report.rank, Rank::APlus);
    }

    #[test]
    fn json_roundtrip() {
        let report = QuizReport::from_session(&finished_session()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");

        report.save_json(&path).unwrap();
        let loaded = QuizReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.score, report.score);
        assert_eq!(loaded.rank, report.rank);
    }
}
