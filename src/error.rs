//! Error types for the hockey stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unexpected payload: {what}")]
    UnexpectedPayload { what: String },

    #[error("Background task failed: {message}")]
    Task { message: String },
}

impl From<tokio::task::JoinError> for StatsError {
    fn from(err: tokio::task::JoinError) -> Self {
        StatsError::Task {
            message: err.to_string(),
        }
    }
}
