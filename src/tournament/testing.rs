//! In-memory match source for unit tests.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::cli::types::ids::TournamentId;
use crate::tournament::source::{FetchFailure, FetchOutcome, MatchSource};
use crate::tournament::types::{Match, Participant};

pub fn game(p1: &str, s1: i64, p2: &str, s2: i64) -> Match {
    Match {
        participant1: Participant {
            nickname: p1.to_string(),
            score: s1,
            period_scores: Vec::new(),
        },
        participant2: Participant {
            nickname: p2.to_string(),
            score: s2,
            period_scores: Vec::new(),
        },
        ..Match::default()
    }
}

/// Days without an entry list no tournaments; tournaments without an entry
/// fail with a 404.
#[derive(Default)]
pub struct FakeSource {
    days: HashMap<NaiveDate, FetchOutcome<Vec<TournamentId>>>,
    tournaments: HashMap<TournamentId, FetchOutcome<Vec<Match>>>,
    stalled: Vec<TournamentId>,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: NaiveDate, ids: Vec<&str>) -> Self {
        let ids = ids.into_iter().map(TournamentId::new).collect();
        self.days.insert(day, FetchOutcome::Fetched(ids));
        self
    }

    pub fn with_failed_day(mut self, day: NaiveDate, reason: FetchFailure) -> Self {
        self.days.insert(day, FetchOutcome::Failed(reason));
        self
    }

    pub fn with_tournament(mut self, id: &str, matches: Vec<Match>) -> Self {
        self.tournaments
            .insert(TournamentId::new(id), FetchOutcome::Fetched(matches));
        self
    }

    pub fn with_failed_tournament(mut self, id: &str, reason: FetchFailure) -> Self {
        self.tournaments
            .insert(TournamentId::new(id), FetchOutcome::Failed(reason));
        self
    }

    /// The tournament never answers.
    pub fn with_stalled_tournament(mut self, id: &str) -> Self {
        self.stalled.push(TournamentId::new(id));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Highest number of concurrent `tournament_matches` calls observed.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn match_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MatchSource for FakeSource {
    async fn day_tournaments(&self, day: NaiveDate) -> FetchOutcome<Vec<TournamentId>> {
        self.days
            .get(&day)
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }

    async fn tournament_matches(&self, tournament: &TournamentId) -> FetchOutcome<Vec<Match>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.stalled.contains(tournament) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.tournaments
            .get(tournament)
            .cloned()
            .unwrap_or(FetchOutcome::Failed(FetchFailure::Status(404)))
    }
}
