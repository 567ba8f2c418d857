//! Hockey Stats Library
//!
//! Monthly statistics and salary reports for players of an online hockey
//! league, computed from the match records of a public tournament API.
//!
//! ## Features
//!
//! - **Schedule Walking**: Find the tournaments active on every day of a month
//! - **Concurrent Collection**: Fetch tournament matches under one global
//!   concurrency ceiling, tolerating individual failures
//! - **Outcome Reduction**: Game and period wins, draws and losses per player
//! - **Salary Model**: Shift and cancelled-game modelling with configurable
//!   pay rates and cancellation policy
//! - **Roster Ranking**: Rank many players by winrate
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hockey_stats::{
//!     commands::salary_report::{handle_salary_report, SalaryReportParams},
//!     config::ReportConfig,
//!     Month, Nickname, Year,
//! };
//!
//! # async fn example() -> hockey_stats::Result<()> {
//! let params = SalaryReportParams {
//!     api_url: Some("https://tournaments.example.com/api".to_string()),
//!     nickname: Nickname::new("Player1"),
//!     config: ReportConfig::new(Year::new(2025), Month::new(9)?),
//!     as_json: false,
//! };
//!
//! handle_salary_report(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the API base URL to avoid passing it in every command:
//! ```bash
//! export HOCKEY_STATS_API_URL=https://tournaments.example.com/api
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod stats;
pub mod tournament;

// Re-export commonly used types
pub use cli::types::{CancelledPolicy, DayAttributionMode, Month, Nickname, TournamentId, Year};
pub use error::{Result, StatsError};
pub use stats::{RankedPlayer, RankingStats, SalaryStats};

pub const API_URL_ENV_VAR: &str = "HOCKEY_STATS_API_URL";
