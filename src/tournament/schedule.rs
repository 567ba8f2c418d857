//! Schedule walker: which days a report covers and which tournaments ran on
//! each of them.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use log::{info, warn};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::cli::types::{
    ids::TournamentId,
    time::{Month, Year},
};
use crate::config::DayCoverage;
use crate::error::{Result, StatsError};
use crate::tournament::collect::FetchLimiter;
use crate::tournament::source::{FetchFailure, FetchOutcome, MatchSource};

/// Tournaments active on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: NaiveDate,
    pub tournaments: Vec<TournamentId>,
}

fn invalid_date(year: i32, month: u32, day: u32) -> StatsError {
    StatsError::InvalidDate { year, month, day }
}

pub fn days_in_month(year: Year, month: Month) -> Result<u32> {
    let (y, m) = (year.as_i32(), month.as_u32());
    let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid_date(y, m, 1))?;
    let (next_y, next_m) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    let next = NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .ok_or_else(|| invalid_date(next_y, next_m, 1))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Calendar days covered by a report, in order.
pub fn month_days(year: Year, month: Month, coverage: DayCoverage) -> Result<Vec<NaiveDate>> {
    let (y, m) = (year.as_i32(), month.as_u32());
    let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid_date(y, m, 1))?;
    let length = days_in_month(year, month)?;
    let count = match coverage {
        DayCoverage::FullMonth => length,
        DayCoverage::FirstDays(n) => n.min(length),
    };
    Ok(first.iter_days().take(count as usize).collect())
}

/// First and last instant of a local day, as UTC ISO-8601 strings with a `Z`
/// suffix. The end bound carries microsecond precision.
pub fn day_bounds_utc(day: NaiveDate, offset: FixedOffset) -> Result<(String, String)> {
    let unusable = || invalid_date(day.year(), day.month(), day.day());

    let start = day.and_hms_micro_opt(0, 0, 0, 0).ok_or_else(unusable)?;
    let end = day
        .and_hms_micro_opt(23, 59, 59, 999_999)
        .ok_or_else(unusable)?;

    let to_utc = |naive: NaiveDateTime| {
        offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::AutoSi, true))
            .ok_or_else(unusable)
    };

    Ok((to_utc(start)?, to_utc(end)?))
}

/// Look up the tournaments of every day concurrently.
///
/// A day whose lookup fails contributes an empty tournament list. The result
/// is ordered by day.
pub async fn walk_schedule<S>(
    source: Arc<S>,
    days: &[NaiveDate],
    limiter: &FetchLimiter,
) -> Vec<DaySchedule>
where
    S: MatchSource + 'static,
{
    let mut tasks = JoinSet::new();
    for &day in days {
        let source = Arc::clone(&source);
        let limiter = limiter.clone();
        tasks.spawn(async move {
            let outcome = limiter.run(source.day_tournaments(day)).await;
            (day, outcome)
        });
    }

    let mut schedule = Vec::with_capacity(days.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((day, FetchOutcome::Fetched(tournaments))) => {
                schedule.push(DaySchedule { day, tournaments })
            }
            Ok((day, FetchOutcome::Failed(reason))) => {
                warn!("Skipping tournaments for {}: {}", day, reason);
                schedule.push(DaySchedule {
                    day,
                    tournaments: Vec::new(),
                });
            }
            Err(e) => warn!(
                "Skipping a day lookup: {}",
                FetchFailure::from(StatsError::from(e))
            ),
        }
    }
    schedule.sort_by_key(|entry| entry.day);

    info!(
        "Walked {} days, {} tournaments listed",
        schedule.len(),
        schedule.iter().map(|d| d.tournaments.len()).sum::<usize>()
    );
    schedule
}
