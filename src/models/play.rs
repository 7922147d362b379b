//! Recorded play model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::stats::StatsError;

/// One recorded offensive possession.
///
/// Plays are immutable once stored; the only lifecycle operations are
/// append and remove-most-recent (undo).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Positive, unique, monotonically assigned by the store (1, 2, 3, ...)
    pub play_number: u32,

    /// Offensive context (e.g., "half-court", "fast-break")
    pub situation: String,

    /// Scheme run during the situation (e.g., "horns", "pick-roll")
    pub action: String,

    /// Player ids involved in the play; never empty for a well-formed record
    pub players_involved: Vec<String>,

    /// Points scored as a string ("2", "3") or a sentinel
    /// ("turnover", "end-of-period")
    pub result: String,

    /// Opposing team label, when tracked
    pub opponent: Option<String>,

    /// When this play was recorded
    pub recorded_at: DateTime<Utc>,
}

impl PlayRecord {
    /// Create a new play recorded now.
    pub fn new(
        play_number: u32,
        situation: String,
        action: String,
        players_involved: Vec<String>,
        result: String,
    ) -> Self {
        Self {
            play_number,
            situation,
            action,
            players_involved,
            result,
            opponent: None,
            recorded_at: Utc::now(),
        }
    }

    /// Builder method to set the opponent.
    pub fn with_opponent(mut self, opponent: String) -> Self {
        self.opponent = Some(opponent);
        self
    }

    /// Parse the stored result into a typed outcome.
    pub fn outcome(&self) -> Result<Outcome, StatsError> {
        Outcome::parse(&self.result).map_err(|_| StatsError::InvalidResult {
            play_number: self.play_number,
            value: self.result.clone(),
        })
    }

    /// Whether the given player took part in this play.
    pub fn involves(&self, player_id: &str) -> bool {
        self.players_involved.iter().any(|p| p == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_creation() {
        let play = PlayRecord::new(
            1,
            "half-court".to_string(),
            "horns".to_string(),
            vec!["p1".to_string(), "p2".to_string()],
            "2".to_string(),
        );

        assert_eq!(play.play_number, 1);
        assert_eq!(play.action, "horns");
        assert!(play.involves("p1"));
        assert!(play.involves("p2"));
        assert!(!play.involves("p3"));
        assert!(play.opponent.is_none());
    }

    #[test]
    fn test_play_builder_opponent() {
        let play = PlayRecord::new(
            2,
            "fast-break".to_string(),
            "drag".to_string(),
            vec!["p1".to_string()],
            "3".to_string(),
        )
        .with_opponent("Springville".to_string());

        assert_eq!(play.opponent, Some("Springville".to_string()));
    }

    #[test]
    fn test_play_outcome_points() {
        let play = PlayRecord::new(
            1,
            "half-court".to_string(),
            "horns".to_string(),
            vec!["p1".to_string()],
            "2".to_string(),
        );
        assert_eq!(play.outcome().unwrap(), Outcome::Points(2));
    }

    #[test]
    fn test_play_outcome_invalid_carries_play_number() {
        let play = PlayRecord::new(
            7,
            "half-court".to_string(),
            "horns".to_string(),
            vec!["p1".to_string()],
            "and-one".to_string(),
        );

        match play.outcome() {
            Err(StatsError::InvalidResult { play_number, value }) => {
                assert_eq!(play_number, 7);
                assert_eq!(value, "and-one");
            }
            other => panic!("expected InvalidResult, got {:?}", other),
        }
    }

    #[test]
    fn test_play_serialization() {
        let play = PlayRecord::new(
            1,
            "half-court".to_string(),
            "pick-roll".to_string(),
            vec!["p1".to_string()],
            "turnover".to_string(),
        );

        let json = serde_json::to_string(&play).unwrap();
        let deserialized: PlayRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(play.play_number, deserialized.play_number);
        assert_eq!(play.result, deserialized.result);
        assert_eq!(play.players_involved, deserialized.players_involved);
    }
}
