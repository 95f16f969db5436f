pub mod chat;
pub mod meditation;
pub mod weather;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("serene/", env!("CARGO_PKG_VERSION"));

/// Shared blocking HTTP client settings for every remote service.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent(USER_AGENT)
        .build()
        .context("Building HTTP client")
}
