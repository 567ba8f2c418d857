//! Command implementations for the hockey stats CLI

pub mod common;
pub mod salary_report;
pub mod stats_report;

use crate::{error::StatsError, Result, API_URL_ENV_VAR};


/// Use the explicit API URL, else fall back to the environment.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| StatsError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}
