//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{
    utc_offset_hours, DayCoverage, FetchSettings, PayRates, ReportConfig, DEFAULT_GAMES_PER_SHIFT,
    DEFAULT_MAX_IN_FLIGHT, DEFAULT_TIMEOUT_SECS, DEFAULT_UTC_OFFSET_HOURS,
};
use crate::Result;
use types::{CancelledPolicy, DayAttributionMode, Month, Nickname, Year};

/// Report arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Report year (e.g. 2025).
    #[clap(long, short, default_value_t = Year::default())]
    pub year: Year,

    /// Report month, 1-12.
    #[clap(long, short, default_value_t = Month::default())]
    pub month: Month,

    /// Only walk the first N days of the month (full month when omitted).
    #[clap(long)]
    pub days: Option<u32>,

    /// Games that make up one shift.
    #[clap(long, default_value_t = DEFAULT_GAMES_PER_SHIFT)]
    pub games_per_shift: u32,

    /// Maximum simultaneous requests to the tournament API.
    #[clap(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    pub concurrency: usize,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// League time zone as whole hours east of UTC.
    #[clap(long, default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_negative_numbers = true)]
    pub utc_offset: i32,

    /// Which day a match counts toward when counting shifts.
    #[clap(long, value_enum, default_value_t = DayAttributionMode::default())]
    pub day_attribution: DayAttributionMode,

    /// Only count matches whose status is finished or ready_to_finish.
    #[clap(long)]
    pub played_only: bool,

    /// Tournament API base URL (or set `HOCKEY_STATS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

impl CommonArgs {
    /// Build the report configuration these arguments describe.
    pub fn report_config(&self) -> Result<ReportConfig> {
        let fetch = FetchSettings {
            max_in_flight: self.concurrency,
            request_timeout: Duration::from_secs(self.timeout),
            utc_offset: utc_offset_hours(self.utc_offset)?,
            ..FetchSettings::default()
        };

        Ok(ReportConfig::new(self.year, self.month)
            .with_coverage(DayCoverage::from_option(self.days))
            .with_games_per_shift(self.games_per_shift)
            .with_day_attribution(self.day_attribution)
            .with_played_statuses_only(self.played_only)
            .with_fetch(fetch))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Monthly salary report for one player.
    Salary {
        /// Player nickname.
        #[clap(long = "nickname", short = 'n')]
        nickname: Nickname,

        /// How games implied by worked shifts but missing from the data are credited.
        #[clap(long, value_enum, default_value_t = CancelledPolicy::default())]
        cancelled: CancelledPolicy,

        /// JSON file overriding the default pay rates.
        #[clap(long)]
        rates: Option<PathBuf>,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Rank a roster of players by monthly winrate.
    ///
    /// Repeat the nickname flag: `-n Player1 -n Player2`.
    Stats {
        /// Player nicknames (repeatable).
        #[clap(long = "nickname", short = 'n', required = true)]
        nicknames: Vec<Nickname>,

        #[clap(flatten)]
        common: CommonArgs,
    },
}

/// Pay rates for a salary run: the rates file if given, else the defaults.
pub fn load_rates(path: Option<&Path>) -> Result<PayRates> {
    match path {
        Some(path) => PayRates::from_file(path),
        None => Ok(PayRates::default()),
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "hockey-stats",
    version,
    about = "Monthly hockey player statistics and salary reports"
)]
pub struct HockeyStats {
    #[clap(subcommand)]
    pub command: Commands,
}
