//! Policy switches that change how a report is computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How games implied by the shift schedule but absent from the data are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CancelledPolicy {
    /// Credit each cancelled game as a won game with three won periods.
    #[default]
    #[value(name = "as_win", alias = "as-win")]
    AsWin,
    /// Pay cancelled games but give them no win or draw credit.
    #[value(name = "as_loss", alias = "as-loss")]
    AsLoss,
}

impl fmt::Display for CancelledPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CancelledPolicy::AsWin => "as_win",
            CancelledPolicy::AsLoss => "as_loss",
        };
        write!(f, "{}", s)
    }
}

/// Which calendar day a counted match is attributed to when counting shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DayAttributionMode {
    /// Every match counts toward the local date of the report run.
    ///
    /// Known defect kept for compatibility with existing payroll figures:
    /// a whole month collected in one run counts as a single active day.
    #[default]
    RunDate,
    /// Each match counts toward the schedule day it was listed under.
    MatchDay,
}

impl fmt::Display for DayAttributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayAttributionMode::RunDate => "run-date",
            DayAttributionMode::MatchDay => "match-day",
        };
        write!(f, "{}", s)
    }
}
