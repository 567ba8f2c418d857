//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;

use hockey_stats::{
    config::{DayCoverage, ReportConfig},
    tournament::{
        source::{FetchFailure, FetchOutcome, MatchSource},
        types::{Match, Participant},
    },
    Month, TournamentId, Year,
};

pub fn september(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
}

/// Report over the first `days` days of September 2025.
pub fn config(days: u32) -> ReportConfig {
    ReportConfig::new(Year::new(2025), Month::new(9).unwrap())
        .with_coverage(DayCoverage::FirstDays(days))
}

pub fn side(nickname: &str, score: i64, periods: Vec<i64>) -> Participant {
    Participant {
        nickname: nickname.to_string(),
        score,
        period_scores: periods,
    }
}

pub fn game(p1: &str, s1: i64, p2: &str, s2: i64) -> Match {
    Match {
        participant1: side(p1, s1, Vec::new()),
        participant2: side(p2, s2, Vec::new()),
        ..Match::default()
    }
}

/// Fixed in-memory tournament data. Unknown tournaments fail with a 404.
#[derive(Default)]
pub struct MapSource {
    days: HashMap<NaiveDate, FetchOutcome<Vec<TournamentId>>>,
    tournaments: HashMap<TournamentId, FetchOutcome<Vec<Match>>>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(mut self, day: NaiveDate, ids: &[&str]) -> Self {
        let ids = ids.iter().map(|id| TournamentId::new(*id)).collect();
        self.days.insert(day, FetchOutcome::Fetched(ids));
        self
    }

    pub fn failed_day(mut self, day: NaiveDate) -> Self {
        self.days
            .insert(day, FetchOutcome::Failed(FetchFailure::Timeout));
        self
    }

    pub fn tournament(mut self, id: &str, matches: Vec<Match>) -> Self {
        self.tournaments
            .insert(TournamentId::new(id), FetchOutcome::Fetched(matches));
        self
    }

    pub fn failed_tournament(mut self, id: &str, reason: FetchFailure) -> Self {
        self.tournaments
            .insert(TournamentId::new(id), FetchOutcome::Failed(reason));
        self
    }
}

impl MatchSource for MapSource {
    async fn day_tournaments(&self, day: NaiveDate) -> FetchOutcome<Vec<TournamentId>> {
        self.days
            .get(&day)
            .cloned()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }

    async fn tournament_matches(&self, tournament: &TournamentId) -> FetchOutcome<Vec<Match>> {
        self.tournaments
            .get(tournament)
            .cloned()
            .unwrap_or(FetchOutcome::Failed(FetchFailure::Status(404)))
    }
}
