//! Pipeline wiring shared by the salary and stats commands.

use chrono::{FixedOffset, NaiveDate, Utc};
use log::info;
use std::sync::Arc;

use crate::{
    config::ReportConfig,
    stats::{reduce_outcome, DayAttribution, PlayerOutcome},
    tournament::{
        collect::{collect_matches, FetchLimiter},
        schedule::{month_days, walk_schedule},
        source::MatchSource,
        types::Match,
    },
    Nickname, Result,
};

/// Local calendar date "now" at `offset`.
pub fn today_in(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Walk the configured days and collect every match listed on them.
///
/// Retrieval failures are absorbed; only an unusable year/month is an error.
pub async fn gather_month_matches<S>(
    source: Arc<S>,
    config: &ReportConfig,
    limiter: &FetchLimiter,
) -> Result<Vec<Match>>
where
    S: MatchSource + 'static,
{
    let days = month_days(config.year, config.month, config.coverage)?;
    info!(
        "Collecting matches for {}-{} ({} days)",
        config.year,
        config.month,
        days.len()
    );

    let schedule = walk_schedule(Arc::clone(&source), &days, limiter).await;
    let mut matches = collect_matches(source, &schedule, limiter).await;

    if config.played_statuses_only {
        let before = matches.len();
        matches.retain(|m| m.status.is_played());
        info!("Kept {} of {} matches with a played status", matches.len(), before);
    }

    Ok(matches)
}

/// Collect the month and reduce it to one player's outcome.
pub async fn player_outcome<S>(
    source: Arc<S>,
    nickname: &Nickname,
    config: &ReportConfig,
    limiter: &FetchLimiter,
    today: NaiveDate,
) -> Result<PlayerOutcome>
where
    S: MatchSource + 'static,
{
    let matches = gather_month_matches(source, config, limiter).await?;
    let attribution = DayAttribution::from_mode(config.day_attribution, today);
    Ok(reduce_outcome(&matches, nickname, attribution))
}
