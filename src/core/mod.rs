//! Core utilities shared across the pipeline
//!
//! - `http`: the transport client used for every API request

pub mod http;

pub use http::{build_client, get_json};
