use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cli::types::ids::{Nickname, TournamentId};
use crate::error::{Result, StatsError};


/// Coerce any JSON scalar to an integer score; anything unusable becomes 0.
pub fn coerce_score(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn de_lenient_score<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_score(&raw))
}

fn de_lenient_periods<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.iter().map(coerce_score).collect()),
        _ => Ok(Vec::new()),
    }
}

fn de_lenient_nickname<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Ok(String::new()),
    }
}

fn de_lenient_participant<'de, D>(deserializer: D) -> std::result::Result<Participant, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Participant>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_lenient_status<'de, D>(deserializer: D) -> std::result::Result<MatchStatus, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(MatchStatus::from_api(&s)),
        _ => Ok(MatchStatus::Unknown),
    }
}

/// Lifecycle state of a match on the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Finished,
    ReadyToFinish,
    Cancelled,
    #[default]
    Unknown,
}

impl MatchStatus {
    pub fn from_api(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "scheduled" => MatchStatus::Scheduled,
            "finished" => MatchStatus::Finished,
            "ready_to_finish" => MatchStatus::ReadyToFinish,
            "cancelled" | "canceled" => MatchStatus::Cancelled,
            _ => MatchStatus::Unknown,
        }
    }

    /// Statuses whose scores are final enough to be paid.
    pub fn is_played(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::ReadyToFinish)
    }
}

/// One side of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, deserialize_with = "de_lenient_nickname")]
    pub nickname: String,
    #[serde(default, deserialize_with = "de_lenient_score")]
    pub score: i64,
    /// Per-period scores, one entry per period played.
    #[serde(
        rename = "prevPeriodsScores",
        default,
        deserialize_with = "de_lenient_periods"
    )]
    pub period_scores: Vec<i64>,
}

impl Participant {
    pub fn is(&self, nickname: &Nickname) -> bool {
        self.nickname == nickname.as_str()
    }
}

/// A match record as retrieved from a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, deserialize_with = "de_lenient_participant")]
    pub participant1: Participant,
    #[serde(default, deserialize_with = "de_lenient_participant")]
    pub participant2: Participant,
    #[serde(default, deserialize_with = "de_lenient_status")]
    pub status: MatchStatus,
    /// Schedule day the tournament was listed under; set by the collector.
    #[serde(skip)]
    pub day: Option<NaiveDate>,
}

impl Match {
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// `(player, opponent)` when `nickname` plays in this match.
    ///
    /// If both sides carry the nickname, the first participant is the player.
    pub fn sides(&self, nickname: &Nickname) -> Option<(&Participant, &Participant)> {
        if self.participant1.is(nickname) {
            Some((&self.participant1, &self.participant2))
        } else if self.participant2.is(nickname) {
            Some((&self.participant2, &self.participant1))
        } else {
            None
        }
    }
}

/// Tournament entry of a day listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentRef {
    pub id: TournamentId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TournamentsPayload {
    List(Vec<TournamentRef>),
    Envelope { tournaments: Vec<TournamentRef> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MatchesPayload {
    List(Vec<Value>),
    Envelope { matches: Vec<Value> },
}

/// Accepts either a bare array or a `{"tournaments": [...]}` envelope.
pub fn parse_tournament_ids(payload: Value) -> Result<Vec<TournamentId>> {
    let refs = match serde_json::from_value(payload) {
        Ok(TournamentsPayload::List(refs)) => refs,
        Ok(TournamentsPayload::Envelope { tournaments }) => tournaments,
        Err(_) => {
            return Err(StatsError::UnexpectedPayload {
                what: "tournament listing".to_string(),
            })
        }
    };
    Ok(refs.into_iter().map(|r| r.id).collect())
}

/// Accepts either a bare array or a `{"matches": [...]}` envelope.
///
/// Entries that do not decode as a match are logged and skipped; the rest of
/// the list is kept.
pub fn parse_matches(payload: Value) -> Result<Vec<Match>> {
    let entries = match serde_json::from_value(payload) {
        Ok(MatchesPayload::List(entries)) => entries,
        Ok(MatchesPayload::Envelope { matches }) => matches,
        Err(_) => {
            return Err(StatsError::UnexpectedPayload {
                what: "match list".to_string(),
            })
        }
    };

    let total = entries.len();
    let matches: Vec<Match> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!("Skipping undecodable match entry: {}", e);
                None
            }
        })
        .collect();

    if matches.len() < total {
        warn!("Kept {} of {} match entries", matches.len(), total);
    }
    Ok(matches)
}
