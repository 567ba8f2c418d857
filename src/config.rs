//! Report configuration.
//!
//! All tunables of a report run live in one immutable [`ReportConfig`] that is
//! passed explicitly into every stage of the pipeline.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::cli::types::{
    policy::{CancelledPolicy, DayAttributionMode},
    time::{Month, Year},
};
use crate::error::{Result, StatsError};

pub const DEFAULT_GAMES_PER_SHIFT: u32 = 12;
pub const DEFAULT_MAX_IN_FLIGHT: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;
pub const USER_AGENT: &str = concat!("hockey-stats/", env!("CARGO_PKG_VERSION"));

/// Fixed compensation rates. Missing keys in a rates file keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayRates {
    pub base_salary: f64,
    pub per_game: f64,
    pub per_win_game: f64,
    pub per_draw_game: f64,
    pub per_win_period: f64,
    pub per_draw_period: f64,
    pub per_shift_bonus: f64,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            base_salary: 20000.0,
            per_game: 20.0,
            per_win_game: 15.0,
            per_draw_game: 7.5,
            per_win_period: 10.0,
            per_draw_period: 5.0,
            per_shift_bonus: 400.0,
        }
    }
}

impl PayRates {
    /// Load rates from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Which days of the month are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCoverage {
    #[default]
    FullMonth,
    /// Only the first `n` days (clamped to the month length).
    FirstDays(u32),
}

impl DayCoverage {
    pub fn from_option(days: Option<u32>) -> Self {
        days.map_or(DayCoverage::FullMonth, DayCoverage::FirstDays)
    }
}

/// Retrieval limits shared by every request of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    /// Maximum simultaneous in-flight requests.
    pub max_in_flight: usize,
    pub request_timeout: Duration,
    /// Offset of the league's local time zone, used for day boundaries.
    pub utc_offset: FixedOffset,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600)
                .unwrap_or_else(|| Utc.fix()),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Build a fixed offset from whole hours east of UTC.
pub fn utc_offset_hours(hours: i32) -> Result<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| StatsError::InvalidConfig {
            message: format!("UTC offset of {hours} hours is out of range"),
        })
}

/// Everything a monthly report run needs besides the nicknames.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub year: Year,
    pub month: Month,
    pub coverage: DayCoverage,
    pub games_per_shift: u32,
    pub rates: PayRates,
    pub cancelled_policy: CancelledPolicy,
    pub day_attribution: DayAttributionMode,
    /// Keep only `finished` / `ready_to_finish` matches.
    pub played_statuses_only: bool,
    pub fetch: FetchSettings,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            year: Year::default(),
            month: Month::default(),
            coverage: DayCoverage::default(),
            games_per_shift: DEFAULT_GAMES_PER_SHIFT,
            rates: PayRates::default(),
            cancelled_policy: CancelledPolicy::default(),
            day_attribution: DayAttributionMode::default(),
            played_statuses_only: false,
            fetch: FetchSettings::default(),
        }
    }
}

impl ReportConfig {
    pub fn new(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            ..Self::default()
        }
    }

    pub fn with_coverage(mut self, coverage: DayCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_games_per_shift(mut self, games_per_shift: u32) -> Self {
        self.games_per_shift = games_per_shift;
        self
    }

    pub fn with_rates(mut self, rates: PayRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_cancelled_policy(mut self, policy: CancelledPolicy) -> Self {
        self.cancelled_policy = policy;
        self
    }

    pub fn with_day_attribution(mut self, mode: DayAttributionMode) -> Self {
        self.day_attribution = mode;
        self
    }

    pub fn with_played_statuses_only(mut self, only_played: bool) -> Self {
        self.played_statuses_only = only_played;
        self
    }

    pub fn with_fetch(mut self, fetch: FetchSettings) -> Self {
        self.fetch = fetch;
        self
    }

    /// Reject settings that would divide by zero or stall the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.games_per_shift == 0 {
            return Err(invalid("games per shift must be positive"));
        }
        if self.fetch.max_in_flight == 0 {
            return Err(invalid("concurrency ceiling must be at least 1"));
        }
        if self.fetch.request_timeout.is_zero() {
            return Err(invalid("request timeout must be positive"));
        }
        if self.coverage == DayCoverage::FirstDays(0) {
            return Err(invalid("day coverage must include at least one day"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> StatsError {
    StatsError::InvalidConfig {
        message: message.to_string(),
    }
}
