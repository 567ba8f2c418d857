//! Shift and cancellation model.

use crate::cli::types::policy::CancelledPolicy;
use crate::stats::outcome::PlayerOutcome;

/// Periods credited for each cancelled game under [`CancelledPolicy::AsWin`]
/// (matches are played best of three periods).
pub const PERIODS_PER_GAME: f64 = 3.0;

/// Shifts worked and the games the schedule implies but the data lacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftSummary {
    /// Fractional; rounded only for display.
    pub shifts: f64,
    pub planned_games: f64,
    /// Never negative.
    pub cancelled_games: f64,
}

/// `shifts = days + played / games_per_shift`, `cancelled = max(0, shifts * games_per_shift - played)`.
pub fn shift_summary(played_games: u32, distinct_days: usize, games_per_shift: u32) -> ShiftSummary {
    let played = f64::from(played_games);
    let per_shift = f64::from(games_per_shift);
    let extra_shifts = if games_per_shift == 0 {
        0.0
    } else {
        played / per_shift
    };

    let shifts = distinct_days as f64 + extra_shifts;
    let planned_games = shifts * per_shift;
    let cancelled_games = (planned_games - played).max(0.0);

    ShiftSummary {
        shifts,
        planned_games,
        cancelled_games,
    }
}

/// Game and period tallies after crediting cancelled games.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditedTotals {
    pub paid_games: f64,
    pub won_games: f64,
    pub won_periods: f64,
}

/// Both policies pay cancelled games; only `AsWin` credits them as wins.
pub fn credit_cancelled(
    outcome: &PlayerOutcome,
    cancelled_games: f64,
    policy: CancelledPolicy,
) -> CreditedTotals {
    let won_games = f64::from(outcome.won_games);
    let won_periods = f64::from(outcome.won_periods);
    let paid_games = f64::from(outcome.played_games) + cancelled_games;

    match policy {
        CancelledPolicy::AsWin => CreditedTotals {
            paid_games,
            won_games: won_games + cancelled_games,
            won_periods: won_periods + cancelled_games * PERIODS_PER_GAME,
        },
        CancelledPolicy::AsLoss => CreditedTotals {
            paid_games,
            won_games,
            won_periods,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_shift_summary_one_day_two_games() {
        let summary = shift_summary(2, 1, 12);
        assert!(approx(summary.shifts, 1.0 + 2.0 / 12.0));
        assert!(approx(summary.planned_games, 14.0));
        assert!(approx(summary.cancelled_games, 12.0));
    }

    #[test]
    fn test_shift_summary_no_activity() {
        let summary = shift_summary(0, 0, 12);
        assert_eq!(summary.shifts, 0.0);
        assert_eq!(summary.cancelled_games, 0.0);
    }

    #[test]
    fn test_shift_summary_without_days_has_no_cancellations() {
        let summary = shift_summary(7, 0, 12);
        assert!(approx(summary.shifts, 7.0 / 12.0));
        assert!(summary.cancelled_games >= 0.0);
        assert!(summary.cancelled_games < 1e-9);
    }

    #[test]
    fn test_shift_summary_zero_games_per_shift_is_finite() {
        let summary = shift_summary(5, 2, 0);
        assert_eq!(summary.shifts, 2.0);
        assert_eq!(summary.cancelled_games, 0.0);
    }

    #[test]
    fn test_cancelled_never_negative() {
        for played in 0..50 {
            for days in 0..5 {
                for per_shift in [1, 5, 12, 13] {
                    let summary = shift_summary(played, days, per_shift);
                    assert!(summary.cancelled_games >= 0.0);
                    assert!(summary.shifts >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_credit_as_win() {
        let outcome = PlayerOutcome {
            played_games: 2,
            won_games: 1,
            drawn_games: 1,
            won_periods: 2,
            ..PlayerOutcome::default()
        };

        let credited = credit_cancelled(&outcome, 12.0, CancelledPolicy::AsWin);
        assert_eq!(credited.paid_games, 14.0);
        assert_eq!(credited.won_games, 13.0);
        assert_eq!(credited.won_periods, 38.0);
    }

    #[test]
    fn test_credit_as_loss() {
        let outcome = PlayerOutcome {
            played_games: 2,
            won_games: 1,
            won_periods: 2,
            ..PlayerOutcome::default()
        };

        let credited = credit_cancelled(&outcome, 12.0, CancelledPolicy::AsLoss);
        assert_eq!(credited.paid_games, 14.0);
        assert_eq!(credited.won_games, 1.0);
        assert_eq!(credited.won_periods, 2.0);
    }
}
