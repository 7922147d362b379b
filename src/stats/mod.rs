//! Scoring statistics engine.
//!
//! Computes mean points per group over the recorded play log:
//! - Points per action
//! - Points per player
//! - Points per situation
//!
//! Grouping is driven by an injected vocabulary (actions and situations
//! vary by season) or roster, never hard-coded. Every configured key gets
//! exactly one entry in the output, zero-filled when no play matched.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::PlayRecord;

/// Errors raised while scoring individual plays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("play {play_number} has unrecognized result {value:?}")]
    InvalidResult { play_number: u32, value: String },
}

/// A play whose stored result failed to parse.
///
/// Invalid plays are excluded from every group but never abort the pass;
/// callers get valid partial results plus this side list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidPlay {
    pub play_number: u32,
    pub result: String,
}

/// Mean score of one group.
///
/// Serializes as the bare number `0` for an empty group and as a string
/// with exactly two fraction digits (e.g. `"1.50"`) otherwise. Downstream
/// rendering depends on this asymmetry, so it is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeanScore {
    Empty,
    Mean(String),
}

impl MeanScore {
    /// Mean of the given scores, rounded half-up to two fraction digits.
    pub fn from_scores(scores: &[u32]) -> Self {
        if scores.is_empty() {
            return MeanScore::Empty;
        }
        let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
        let mean = sum as f64 / scores.len() as f64;
        let rounded = (mean * 100.0).round() / 100.0;
        MeanScore::Mean(format!("{:.2}", rounded))
    }
}

impl std::fmt::Display for MeanScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeanScore::Empty => write!(f, "0"),
            MeanScore::Mean(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for MeanScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MeanScore::Empty => serializer.serialize_u32(0),
            MeanScore::Mean(s) => serializer.serialize_str(s),
        }
    }
}

/// Result of one aggregation pass: one mean per configured key, plus the
/// plays that could not be scored.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregation {
    pub averages: BTreeMap<String, MeanScore>,
    pub invalid_plays: Vec<InvalidPlay>,
}

/// Score every play up front.
///
/// Returns one entry per play in input order: `Some(score)` for plays
/// whose result parsed, `None` for invalid ones. Each invalid play is
/// reported exactly once no matter how many groups it would have fed.
fn score_plays(plays: &[PlayRecord]) -> (Vec<Option<u32>>, Vec<InvalidPlay>) {
    let mut scores = Vec::with_capacity(plays.len());
    let mut invalid = Vec::new();

    for play in plays {
        match play.outcome() {
            Ok(outcome) => scores.push(Some(outcome.score())),
            Err(StatsError::InvalidResult { play_number, value }) => {
                tracing::warn!(play_number, result = %value, "skipping play with unrecognized result");
                invalid.push(InvalidPlay {
                    play_number,
                    result: value,
                });
                scores.push(None);
            }
        }
    }

    (scores, invalid)
}

/// Group play scores under vocabulary keys selected by `key_of`.
///
/// A play contributes to the key its extracted field equals exactly
/// (string equality, no normalization); plays whose field matches no
/// vocabulary key are dropped from this grouping only. Input order is
/// preserved within each group.
fn group_scores<'a, F>(
    plays: &[PlayRecord],
    key_of: F,
    vocabulary: &'a [String],
) -> (BTreeMap<&'a str, Vec<u32>>, Vec<InvalidPlay>)
where
    F: Fn(&PlayRecord) -> &str,
{
    let mut groups: BTreeMap<&str, Vec<u32>> =
        vocabulary.iter().map(|k| (k.as_str(), Vec::new())).collect();

    let (scores, invalid) = score_plays(plays);

    for (play, score) in plays.iter().zip(scores) {
        let Some(score) = score else { continue };
        if let Some(group) = groups.get_mut(key_of(play)) {
            group.push(score);
        }
    }

    (groups, invalid)
}

/// Group play scores per roster player.
///
/// Membership test, not equality: a play listing several players
/// contributes its score independently to each of their groups, so team
/// scoring is intentionally double-counted across shared plays.
fn group_scores_by_player<'a>(
    plays: &[PlayRecord],
    roster: &'a [String],
) -> (BTreeMap<&'a str, Vec<u32>>, Vec<InvalidPlay>) {
    let mut groups: BTreeMap<&str, Vec<u32>> =
        roster.iter().map(|p| (p.as_str(), Vec::new())).collect();

    let (scores, invalid) = score_plays(plays);

    for (play, score) in plays.iter().zip(scores) {
        let Some(score) = score else { continue };
        for player in roster {
            if play.involves(player) {
                if let Some(group) = groups.get_mut(player.as_str()) {
                    group.push(score);
                }
            }
        }
    }

    (groups, invalid)
}

fn reduce(groups: BTreeMap<&str, Vec<u32>>, invalid_plays: Vec<InvalidPlay>) -> Aggregation {
    let averages = groups
        .into_iter()
        .map(|(key, scores)| (key.to_string(), MeanScore::from_scores(&scores)))
        .collect();

    Aggregation {
        averages,
        invalid_plays,
    }
}

/// Mean points per action, one entry per vocabulary key.
pub fn averages_by_action(plays: &[PlayRecord], vocabulary: &[String]) -> Aggregation {
    let (groups, invalid) = group_scores(plays, |p| p.action.as_str(), vocabulary);
    reduce(groups, invalid)
}

/// Mean points per player, one entry per roster player.
pub fn averages_by_player(plays: &[PlayRecord], roster: &[String]) -> Aggregation {
    let (groups, invalid) = group_scores_by_player(plays, roster);
    reduce(groups, invalid)
}

/// Mean points per situation, one entry per configured situation.
pub fn averages_by_situation(plays: &[PlayRecord], situations: &[String]) -> Aggregation {
    let (groups, invalid) = group_scores(plays, |p| p.situation.as_str(), situations);
    reduce(groups, invalid)
}
