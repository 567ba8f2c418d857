//! Salary report command implementation

use chrono::NaiveDate;
use std::sync::Arc;

use crate::{
    config::ReportConfig,
    stats::{salary_stats, SalaryStats},
    tournament::{collect::FetchLimiter, http::ApiSource, source::MatchSource},
    Nickname, Result,
};

use super::{
    common::{player_outcome, today_in},
    resolve_api_url,
};

/// Parameters for the salary command
#[derive(Debug)]
pub struct SalaryReportParams {
    pub api_url: Option<String>,
    pub nickname: Nickname,
    pub config: ReportConfig,
    pub as_json: bool,
}

/// Monthly salary statistics for one player.
pub async fn salary_report<S>(
    source: Arc<S>,
    nickname: &Nickname,
    config: &ReportConfig,
    limiter: &FetchLimiter,
    today: NaiveDate,
) -> Result<SalaryStats>
where
    S: MatchSource + 'static,
{
    let outcome = player_outcome(source, nickname, config, limiter, today).await?;
    Ok(salary_stats(&outcome, config))
}

/// Render the text form of a salary report. Fractional fields always show
/// a decimal point (`12.0`).
pub fn format_salary_report(nickname: &Nickname, config: &ReportConfig, stats: &SalaryStats) -> String {
    [
        format!(
            "Player {} salary report for {}-{}",
            nickname, config.year, config.month
        ),
        format!("Played games: {}", stats.played_games),
        format!("Cancelled games: {:?}", stats.cancelled_games),
        format!("Shifts: {:?}", stats.shifts),
        format!("Wins: {:?}", stats.wins),
        format!("Draws: {}", stats.draws),
        format!("Winrate: {:?} %", stats.winrate),
        format!("Total salary: ${:?}", stats.total_salary),
    ]
    .join("\n")
}

/// Handle the salary command
pub async fn handle_salary_report(params: SalaryReportParams) -> Result<()> {
    params.config.validate()?;
    let api_url = resolve_api_url(params.api_url)?;

    let source = Arc::new(ApiSource::new(api_url, &params.config.fetch)?);
    let limiter = FetchLimiter::from_settings(&params.config.fetch);
    let today = today_in(params.config.fetch.utc_offset);

    // tarpaulin::skip - HTTP call, tested via integration tests
    let stats = salary_report(source, &params.nickname, &params.config, &limiter, today).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_salary_report(&params.nickname, &params.config, &stats));
    }

    Ok(())
}
