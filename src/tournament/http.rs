use chrono::{FixedOffset, NaiveDate};
use reqwest::Client;

use crate::cli::types::ids::TournamentId;
use crate::config::FetchSettings;
use crate::core::http::{build_client, get_json};
use crate::tournament::schedule::day_bounds_utc;
use crate::tournament::source::{FetchOutcome, MatchSource};
use crate::tournament::types::{parse_matches, parse_tournament_ids, Match};
use crate::Result;


/// [`MatchSource`] backed by the tournament HTTP API.
pub struct ApiSource {
    client: Client,
    base_url: String,
    utc_offset: FixedOffset,
}

impl ApiSource {
    pub fn new(base_url: impl Into<String>, settings: &FetchSettings) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(settings)?,
            base_url,
            utc_offset: settings.utc_offset,
        })
    }

    pub fn tournaments_url(&self) -> String {
        format!("{}/tournaments", self.base_url)
    }

    pub fn matches_url(&self, tournament: &TournamentId) -> String {
        format!("{}/tournaments/{}/matches", self.base_url, tournament)
    }

    async fn fetch_day_tournaments(&self, day: NaiveDate) -> Result<Vec<TournamentId>> {
        let (from, to) = day_bounds_utc(day, self.utc_offset)?;
        let params = [("from", from), ("to", to)];
        let body = get_json(&self.client, &self.tournaments_url(), &params).await?;
        parse_tournament_ids(body)
    }

    async fn fetch_matches(&self, tournament: &TournamentId) -> Result<Vec<Match>> {
        let body = get_json(&self.client, &self.matches_url(tournament), &[]).await?;
        parse_matches(body)
    }
}

impl MatchSource for ApiSource {
    async fn day_tournaments(&self, day: NaiveDate) -> FetchOutcome<Vec<TournamentId>> {
        self.fetch_day_tournaments(day).await.into()
    }

    async fn tournament_matches(&self, tournament: &TournamentId) -> FetchOutcome<Vec<Match>> {
        self.fetch_matches(tournament).await.into()
    }
}
