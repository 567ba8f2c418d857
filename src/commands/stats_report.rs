//! Roster ranking command implementation

use chrono::NaiveDate;
use log::warn;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::{
    config::ReportConfig,
    error::StatsError,
    stats::{rank_by_winrate, ranking_stats, RankedPlayer},
    tournament::{collect::FetchLimiter, http::ApiSource, source::MatchSource},
    Nickname, Result,
};

use super::{
    common::{player_outcome, today_in},
    resolve_api_url,
};

/// Parameters for the stats command
#[derive(Debug)]
pub struct StatsReportParams {
    pub api_url: Option<String>,
    pub nicknames: Vec<Nickname>,
    pub config: ReportConfig,
    pub as_json: bool,
}

/// Rank every player of `roster` by winrate.
///
/// Players are processed concurrently and share `limiter`. A player whose
/// task fails is reported with empty statistics.
pub async fn roster_report<S>(
    source: Arc<S>,
    roster: &[Nickname],
    config: &ReportConfig,
    limiter: &FetchLimiter,
    today: NaiveDate,
) -> Result<Vec<RankedPlayer>>
where
    S: MatchSource + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, nickname) in roster.iter().enumerate() {
        let source = Arc::clone(&source);
        let nickname = nickname.clone();
        let config = config.clone();
        let limiter = limiter.clone();
        tasks.spawn(async move {
            let outcome = player_outcome(source, &nickname, &config, &limiter, today).await;
            (index, outcome)
        });
    }

    let mut outcomes = vec![None; roster.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome?),
            Err(e) => warn!("Player report skipped: {}", StatsError::from(e)),
        }
    }

    let players = roster
        .iter()
        .zip(outcomes)
        .map(|(nickname, outcome)| {
            let outcome = outcome.unwrap_or_default();
            (nickname.clone(), ranking_stats(&outcome, config.games_per_shift))
        })
        .collect();

    Ok(rank_by_winrate(players))
}

/// One ranking line: `rank. nickname | winrate% | shifts Shifts | w-d-l`.
pub fn format_ranked_player(player: &RankedPlayer) -> String {
    let stats = &player.stats;
    format!(
        "{}. {:<10} | {:5.1}% | {:.1} Shifts | {}-{}-{}",
        player.rank,
        player.nickname.as_str(),
        stats.winrate,
        stats.shifts,
        stats.wins,
        stats.draws,
        stats.losses
    )
}

/// Handle the stats command
pub async fn handle_stats_report(params: StatsReportParams) -> Result<()> {
    params.config.validate()?;
    let api_url = resolve_api_url(params.api_url)?;

    let source = Arc::new(ApiSource::new(api_url, &params.config.fetch)?);
    let limiter = FetchLimiter::from_settings(&params.config.fetch);
    let today = today_in(params.config.fetch.utc_offset);
    let (year, month) = (params.config.year, params.config.month);

    if !params.as_json {
        println!("Calculating monthly stats for {}-{}...\n", year, month);
    }

    // tarpaulin::skip - HTTP call, tested via integration tests
    let ranked = roster_report(source, &params.nicknames, &params.config, &limiter, today).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("🏆 Top players for {}-{}\n", year, month);
        for player in &ranked {
            println!("{}", format_ranked_player(player));
        }
    }

    Ok(())
}
