//! Final statistics: the salary profile and the ranking profile.
//!
//! Both profiles start from the same [`PlayerOutcome`]. The salary profile
//! models shifts and cancelled games and prices them; the ranking profile
//! reports plain win/draw/loss counts.

use serde::Serialize;

use crate::cli::types::ids::Nickname;
use crate::config::ReportConfig;
use crate::stats::outcome::PlayerOutcome;
use crate::stats::shifts::{credit_cancelled, shift_summary};

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage of points taken, a draw counting half a win; 0 when no games.
pub fn winrate(wins: f64, draws: f64, games: f64) -> f64 {
    if games <= 0.0 {
        return 0.0;
    }
    (wins + draws * 0.5) / games * 100.0
}

/// Monthly statistics and pay for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryStats {
    pub played_games: u32,
    pub cancelled_games: f64,
    pub shifts: f64,
    /// Game wins including credited cancelled games.
    pub wins: f64,
    pub draws: u32,
    pub winrate: f64,
    pub total_salary: f64,
}

pub fn salary_stats(outcome: &PlayerOutcome, config: &ReportConfig) -> SalaryStats {
    let rates = &config.rates;
    let summary = shift_summary(
        outcome.played_games,
        outcome.distinct_days(),
        config.games_per_shift,
    );
    let credited = credit_cancelled(outcome, summary.cancelled_games, config.cancelled_policy);
    let draws = f64::from(outcome.drawn_games);

    let total_salary = rates.base_salary
        + credited.paid_games * rates.per_game
        + credited.won_games * rates.per_win_game
        + draws * rates.per_draw_game
        + credited.won_periods * rates.per_win_period
        + f64::from(outcome.drawn_periods) * rates.per_draw_period
        + summary.shifts * rates.per_shift_bonus;

    SalaryStats {
        played_games: outcome.played_games,
        cancelled_games: round_to(summary.cancelled_games, 2),
        shifts: round_to(summary.shifts, 2),
        wins: round_to(credited.won_games, 2),
        draws: outcome.drawn_games,
        winrate: round_to(winrate(credited.won_games, draws, credited.paid_games), 2),
        total_salary: round_to(total_salary, 2),
    }
}

/// Monthly statistics used to rank a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingStats {
    pub total_games: u32,
    pub winrate: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub shifts: f64,
}

pub fn ranking_stats(outcome: &PlayerOutcome, games_per_shift: u32) -> RankingStats {
    let total_games = outcome.won_games + outcome.drawn_games + outcome.lost_games;
    let shifts = if games_per_shift == 0 {
        0.0
    } else {
        f64::from(total_games) / f64::from(games_per_shift)
    };

    RankingStats {
        total_games,
        winrate: round_to(
            winrate(
                f64::from(outcome.won_games),
                f64::from(outcome.drawn_games),
                f64::from(total_games),
            ),
            1,
        ),
        wins: outcome.won_games,
        draws: outcome.drawn_games,
        losses: outcome.lost_games,
        shifts: round_to(shifts, 2),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub nickname: Nickname,
    #[serde(flatten)]
    pub stats: RankingStats,
}

/// Order by winrate, best first. Ties keep roster order.
pub fn rank_by_winrate(players: Vec<(Nickname, RankingStats)>) -> Vec<RankedPlayer> {
    let mut players = players;
    players.sort_by(|a, b| b.1.winrate.total_cmp(&a.1.winrate));
    players
        .into_iter()
        .enumerate()
        .map(|(i, (nickname, stats))| RankedPlayer {
            rank: i + 1,
            nickname,
            stats,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::policy::CancelledPolicy;
    use chrono::NaiveDate;

    fn outcome(played: u32, won: u32, drawn: u32, days: u32) -> PlayerOutcome {
        PlayerOutcome {
            played_games: played,
            won_games: won,
            drawn_games: drawn,
            lost_games: played - won - drawn,
            active_days: (1..=days)
                .map(|d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap())
                .collect(),
            ..PlayerOutcome::default()
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.166_666, 2), 1.17);
        assert_eq!(round_to(96.428_571, 1), 96.4);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_winrate_zero_denominator() {
        assert_eq!(winrate(0.0, 0.0, 0.0), 0.0);
        assert_eq!(winrate(3.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_winrate_draw_is_half() {
        assert_eq!(winrate(1.0, 1.0, 2.0), 75.0);
        assert_eq!(winrate(0.0, 4.0, 4.0), 50.0);
    }

    #[test]
    fn test_salary_stats_as_win() {
        let stats = salary_stats(&outcome(2, 1, 1, 1), &ReportConfig::default());

        assert_eq!(stats.played_games, 2);
        assert_eq!(stats.cancelled_games, 12.0);
        assert_eq!(stats.shifts, 1.17);
        assert_eq!(stats.wins, 13.0);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.winrate, 96.43);
        // 20000 + 14*20 + 13*15 + 7.5 + 36*10 + (7/6)*400
        assert_eq!(stats.total_salary, 21309.17);
    }

    #[test]
    fn test_salary_stats_as_loss() {
        let config = ReportConfig::default().with_cancelled_policy(CancelledPolicy::AsLoss);
        let stats = salary_stats(&outcome(2, 1, 1, 1), &config);

        assert_eq!(stats.wins, 1.0);
        assert_eq!(stats.cancelled_games, 12.0);
        assert_eq!(stats.winrate, 10.71);
        // 20000 + 14*20 + 15 + 7.5 + (7/6)*400
        assert_eq!(stats.total_salary, 20769.17);
    }

    #[test]
    fn test_salary_stats_without_games_is_base_salary() {
        let stats = salary_stats(&PlayerOutcome::default(), &ReportConfig::default());

        assert_eq!(stats.played_games, 0);
        assert_eq!(stats.cancelled_games, 0.0);
        assert_eq!(stats.shifts, 0.0);
        assert_eq!(stats.winrate, 0.0);
        assert_eq!(stats.total_salary, 20000.0);
    }

    #[test]
    fn test_salary_counts_periods() {
        let mut o = outcome(1, 1, 0, 0);
        o.won_periods = 2;
        o.drawn_periods = 1;
        let stats = salary_stats(&o, &ReportConfig::default());

        // 20000 + 20 + 15 + 2*10 + 5 + (1/12)*400
        assert_eq!(stats.total_salary, 20093.33);
        assert_eq!(stats.winrate, 100.0);
    }

    #[test]
    fn test_ranking_stats_single_win() {
        let stats = ranking_stats(&outcome(1, 1, 0, 1), 12);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.winrate, 100.0);
        assert_eq!(stats.shifts, 0.08);
    }

    #[test]
    fn test_ranking_stats_rounds_to_one_decimal() {
        let stats = ranking_stats(&outcome(3, 1, 1, 0), 12);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.winrate, 50.0);

        let stats = ranking_stats(&outcome(7, 2, 1, 0), 12);
        assert_eq!(stats.winrate, 35.7);
    }

    #[test]
    fn test_ranking_stats_empty() {
        let stats = ranking_stats(&PlayerOutcome::default(), 12);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.winrate, 0.0);
        assert_eq!(stats.shifts, 0.0);
    }

    #[test]
    fn test_rank_by_winrate_is_stable() {
        let players = vec![
            (Nickname::new("A"), ranking_stats(&outcome(2, 1, 0, 0), 12)),
            (Nickname::new("B"), ranking_stats(&outcome(2, 2, 0, 0), 12)),
            (Nickname::new("C"), ranking_stats(&outcome(4, 2, 0, 0), 12)),
        ];

        let ranked = rank_by_winrate(players);
        let order: Vec<_> = ranked.iter().map(|p| p.nickname.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ranked_player_json_is_flat() {
        let ranked = rank_by_winrate(vec![(
            Nickname::new("Player1"),
            ranking_stats(&outcome(1, 1, 0, 0), 12),
        )]);
        let value = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(value["rank"], 1);
        assert_eq!(value["nickname"], "Player1");
        assert_eq!(value["winrate"], 100.0);
        assert_eq!(value["losses"], 0);
    }
}
