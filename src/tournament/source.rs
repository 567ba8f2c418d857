//! Retrieval interface consumed by the schedule walker and match collector.

use chrono::NaiveDate;
use std::fmt;
use std::future::Future;

use crate::cli::types::ids::TournamentId;
use crate::error::StatsError;
use crate::tournament::types::Match;

/// Why a single retrieval produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection, DNS or other transport-level error.
    Transport(String),
    Timeout,
    /// Non-success HTTP status.
    Status(u16),
    /// Response body was not the expected JSON shape.
    Malformed(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Transport(msg) => write!(f, "transport error: {}", msg),
            FetchFailure::Timeout => write!(f, "timed out"),
            FetchFailure::Status(code) => write!(f, "HTTP status {}", code),
            FetchFailure::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl From<StatsError> for FetchFailure {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Http(e) if e.is_timeout() => FetchFailure::Timeout,
            StatsError::Http(e) => match e.status() {
                Some(status) => FetchFailure::Status(status.as_u16()),
                None if e.is_decode() => FetchFailure::Malformed(e.to_string()),
                None => FetchFailure::Transport(e.to_string()),
            },
            StatsError::Json(e) => FetchFailure::Malformed(e.to_string()),
            StatsError::UnexpectedPayload { what } => FetchFailure::Malformed(what),
            other => FetchFailure::Transport(other.to_string()),
        }
    }
}

/// Result of one retrieval: data, or an explicit failure to be filtered out
/// by the collector.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Failed(FetchFailure),
}

impl<T> From<crate::Result<T>> for FetchOutcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(data) => FetchOutcome::Fetched(data),
            Err(err) => FetchOutcome::Failed(err.into()),
        }
    }
}

/// Read-only, idempotent access to the tournament data source.
pub trait MatchSource: Send + Sync {
    /// Tournaments active on one local calendar day.
    fn day_tournaments(
        &self,
        day: NaiveDate,
    ) -> impl Future<Output = FetchOutcome<Vec<TournamentId>>> + Send;

    /// All matches recorded for one tournament.
    fn tournament_matches(
        &self,
        tournament: &TournamentId,
    ) -> impl Future<Output = FetchOutcome<Vec<Match>>> + Send;
}
