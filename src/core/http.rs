//! HTTP utilities for tournament API communication

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde_json::Value;

use crate::config::FetchSettings;
use crate::Result;

/// Headers sent with every request.
pub fn default_header_map(settings: &FetchSettings) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(&settings.user_agent)?);
    Ok(h)
}

/// Build the shared client; every request it sends is bounded by the
/// configured timeout.
pub fn build_client(settings: &FetchSettings) -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_header_map(settings)?)
        .timeout(settings.request_timeout)
        .build()?;
    Ok(client)
}

/// Single GET returning the parsed JSON body.
pub async fn get_json(client: &Client, url: &str, query: &[(&str, String)]) -> Result<Value> {
    debug!("GET {} {:?}", url, query);

    let res = client
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
