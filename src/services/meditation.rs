use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::settings::MeditationConfig;
use crate::services::http_client;

pub const SEARCH_URL: &str = "https://api.deezer.com/search";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    /// Seconds.
    #[serde(default)]
    pub duration: u32,
    /// 30-second preview clip.
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub link: Option<String>,
    pub artist: Artist,
}

pub struct MeditationClient {
    http: Client,
    base_url: String,
}

impl MeditationClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: SEARCH_URL.to_string(),
        })
    }

    pub fn search(&self, config: &MeditationConfig, query: &str) -> Result<Vec<Track>> {
        let q = search_query(&config.search_prefix, query)?;
        log::debug!("searching tracks for '{}'", q);
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("q", q)])
            .send()
            .context("Requesting track search")?
            .error_for_status()
            .context("Track search returned an error")?
            .text()
            .context("Reading track search response")?;

        let mut tracks = parse_search(&body)?;
        tracks.truncate(config.result_limit);
        Ok(tracks)
    }
}

/// Prefix the user's query; a blank query never reaches the network.
pub fn search_query(prefix: &str, query: &str) -> Result<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(anyhow!("Search query cannot be empty"));
    }
    if prefix.trim().is_empty() {
        Ok(query.to_string())
    } else {
        Ok(format!("{} {}", prefix.trim(), query))
    }
}

/// Tracks from a search body. Anything other than a `data` array is no results.
pub fn parse_search(body: &str) -> Result<Vec<Track>> {
    let value: serde_json::Value = serde_json::from_str(body).context("Parsing track search")?;
    let Some(items) = value.get("data").and_then(|d| d.as_array()) else {
        return Ok(Vec::new());
    };

    let tracks = items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Track>(item.clone()) {
            Ok(track) => Some(track),
            Err(e) => {
                log::debug!("skipping malformed track: {}", e);
                None
            }
        })
        .collect();
    Ok(tracks)
}
