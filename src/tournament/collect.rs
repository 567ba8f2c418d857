//! Match collector: concurrent, failure-tolerant retrieval of every listed
//! tournament, flattened into one match sequence.

use log::{info, warn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::FetchSettings;
use crate::error::StatsError;
use crate::tournament::schedule::DaySchedule;
use crate::tournament::source::{FetchFailure, FetchOutcome, MatchSource};
use crate::tournament::types::Match;


/// Global ceiling on simultaneous requests plus the per-request timeout.
///
/// Clones share the same permits, so one limiter bounds every report of a run.
#[derive(Debug, Clone)]
pub struct FetchLimiter {
    permits: Arc<Semaphore>,
    timeout: Duration,
}

impl FetchLimiter {
    pub fn new(max_in_flight: usize, timeout: Duration) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
            timeout,
        }
    }

    pub fn from_settings(settings: &FetchSettings) -> Self {
        Self::new(settings.max_in_flight, settings.request_timeout)
    }

    /// Wait for a free slot, then drive `request` to completion or timeout.
    pub async fn run<T, F>(&self, request: F) -> FetchOutcome<T>
    where
        F: Future<Output = FetchOutcome<T>>,
    {
        let Ok(_permit) = self.permits.acquire().await else {
            return FetchOutcome::Failed(FetchFailure::Transport(
                "fetch limiter closed".to_string(),
            ));
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => FetchOutcome::Failed(FetchFailure::Timeout),
        }
    }
}

/// Fetch the matches of every scheduled tournament and concatenate them.
///
/// Failed tournaments are logged and contribute nothing. Completion order is
/// arbitrary; each match is stamped with the day its tournament was listed
/// under.
pub async fn collect_matches<S>(
    source: Arc<S>,
    schedule: &[DaySchedule],
    limiter: &FetchLimiter,
) -> Vec<Match>
where
    S: MatchSource + 'static,
{
    let mut tasks = JoinSet::new();
    for entry in schedule {
        for tournament in &entry.tournaments {
            let source = Arc::clone(&source);
            let limiter = limiter.clone();
            let tournament = tournament.clone();
            let day = entry.day;
            tasks.spawn(async move {
                let outcome = limiter.run(source.tournament_matches(&tournament)).await;
                (day, tournament, outcome)
            });
        }
    }

    let mut matches = Vec::new();
    let mut failed = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((day, _, FetchOutcome::Fetched(batch))) => {
                matches.extend(batch.into_iter().map(|m| m.with_day(day)));
            }
            Ok((day, tournament, FetchOutcome::Failed(reason))) => {
                failed += 1;
                warn!("Skipping tournament {} ({}): {}", tournament, day, reason);
            }
            Err(e) => {
                failed += 1;
                warn!(
                    "Skipping tournament: {}",
                    FetchFailure::from(StatsError::from(e))
                );
            }
        }
    }

    info!(
        "Collected {} matches ({} tournaments failed)",
        matches.len(),
        failed
    );
    matches
}
