//! Outcome reducer: one player's raw game and period results.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::cli::types::{ids::Nickname, policy::DayAttributionMode};
use crate::tournament::types::Match;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    pub fn from_scores(player: i64, opponent: i64) -> Self {
        match player.cmp(&opponent) {
            Ordering::Greater => GameResult::Win,
            Ordering::Equal => GameResult::Draw,
            Ordering::Less => GameResult::Loss,
        }
    }
}

/// Day a counted match is attributed to for shift counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAttribution {
    /// Every match counts toward this date (the local date of the run).
    RunDate(NaiveDate),
    /// The schedule day stamped on the match; unstamped matches count toward no day.
    MatchDay,
}

impl DayAttribution {
    pub fn from_mode(mode: DayAttributionMode, today: NaiveDate) -> Self {
        match mode {
            DayAttributionMode::RunDate => DayAttribution::RunDate(today),
            DayAttributionMode::MatchDay => DayAttribution::MatchDay,
        }
    }

    fn day_for(&self, game: &Match) -> Option<NaiveDate> {
        match self {
            DayAttribution::RunDate(today) => Some(*today),
            DayAttribution::MatchDay => game.day,
        }
    }
}

/// Raw counts for one player over a match sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerOutcome {
    pub played_games: u32,
    pub won_games: u32,
    pub drawn_games: u32,
    pub lost_games: u32,
    pub won_periods: u32,
    pub drawn_periods: u32,
    pub active_days: BTreeSet<NaiveDate>,
}

impl PlayerOutcome {
    pub fn distinct_days(&self) -> usize {
        self.active_days.len()
    }
}

/// Reduce `matches` to the outcome of `nickname`.
///
/// Matches the player is not part of are skipped. Period scores are compared
/// pairwise up to the shorter of the two sequences. The result does not depend
/// on the order of `matches`.
pub fn reduce_outcome(
    matches: &[Match],
    nickname: &Nickname,
    attribution: DayAttribution,
) -> PlayerOutcome {
    let (mut played, mut won, mut drawn, mut lost) = (0u32, 0u32, 0u32, 0u32);
    let (mut won_periods, mut drawn_periods) = (0u32, 0u32);
    let mut active_days = BTreeSet::new();

    for game in matches {
        let Some((player, opponent)) = game.sides(nickname) else {
            continue;
        };

        if let Some(day) = attribution.day_for(game) {
            active_days.insert(day);
        }

        played += 1;
        match GameResult::from_scores(player.score, opponent.score) {
            GameResult::Win => won += 1,
            GameResult::Draw => drawn += 1,
            GameResult::Loss => lost += 1,
        }

        for (mine, theirs) in player.period_scores.iter().zip(&opponent.period_scores) {
            match GameResult::from_scores(*mine, *theirs) {
                GameResult::Win => won_periods += 1,
                GameResult::Draw => drawn_periods += 1,
                GameResult::Loss => {}
            }
        }
    }

    PlayerOutcome {
        played_games: played,
        won_games: won,
        drawn_games: drawn,
        lost_games: lost,
        won_periods,
        drawn_periods,
        active_days,
    }
}
