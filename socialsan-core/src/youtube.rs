// socialsan-core/src/youtube.rs
//! YouTube channel lookups used to backfill handles.
//!
//! Older partner records store a `/channel/<id>` URL instead of a handle. The
//! channel's handle lives in `snippet.customUrl` of the YouTube Data API
//! `channels` resource, so the migration asks a [`ChannelResolver`] for it.
//! [`YoutubeClient`] is the real resolver; tests substitute their own.
//!
//! There is no retry or backoff: a failed request is reported and the record
//! is left alone.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};

use crate::errors::{Result, SocialsanError};

/// Production endpoint for the YouTube Data API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";

const CHANNELS_PATH: &str = "/youtube/v3/channels";
const CHANNEL_PARTS: &str = "statistics,snippet";
const CHANNEL_MARKER: &str = "/channel/";

fn count_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

/// Counters are returned as decimal strings by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(deserialize_with = "count_from_str")]
    pub video_count: u64,
    #[serde(deserialize_with = "count_from_str")]
    pub subscriber_count: u64,
    #[serde(deserialize_with = "count_from_str")]
    pub view_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    /// The channel handle, usually `@name`.
    #[serde(default)]
    pub custom_url: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

/// One item of a `channels?part=statistics,snippet` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YoutubeChannel {
    pub id: String,
    pub statistics: ChannelStatistics,
    #[serde(default)]
    pub snippet: Option<ChannelSnippet>,
}

impl YoutubeChannel {
    /// The non-empty `snippet.customUrl`, if any.
    pub fn custom_url(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .and_then(|snippet| snippet.custom_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// The handle to store: `customUrl` with its first `@` removed.
    pub fn handle(&self) -> Option<String> {
        self.custom_url().map(|url| url.replacen('@', "", 1))
    }
}

/// The envelope returned by the `channels` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsResponse {
    #[serde(default)]
    pub items: Vec<YoutubeChannel>,
}

impl ChannelsResponse {
    /// The first returned channel; a lookup by id yields at most one.
    pub fn into_first_channel(self) -> Option<YoutubeChannel> {
        self.items.into_iter().next()
    }
}

/// Returns the channel id of a `.../channel/<id>` identifier.
///
/// Only the text between the first and second `/channel/` marker is taken;
/// nothing else is parsed.
pub fn channel_id_from_identifier(identifier: &str) -> Option<&str> {
    identifier.split(CHANNEL_MARKER).nth(1)
}

/// Resolves a YouTube channel id to the channel's handle.
pub trait ChannelResolver {
    /// `Ok(None)` means the channel exists but has no handle, or was not found.
    fn resolve_handle(&self, channel_id: &str) -> Result<Option<String>>;
}

/// A blocking client for the YouTube Data API.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL)
    }

    /// Points the client at another host, e.g. a mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches a single channel by id.
    pub fn fetch_channel(&self, channel_id: &str) -> Result<Option<YoutubeChannel>> {
        let url = format!("{}{}", self.base_url, CHANNELS_PATH);
        debug!("Fetching YouTube channel '{}' from {}", channel_id, url);

        let response = self
            .client
            .get(&url)
            .query(&[("part", CHANNEL_PARTS), ("id", channel_id)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SocialsanError::YoutubeApi {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text()?;
        let channels: ChannelsResponse = serde_json::from_str(&text)?;
        debug!("YouTube returned {} channel(s) for '{}'", channels.items.len(), channel_id);
        Ok(channels.into_first_channel())
    }
}

impl ChannelResolver for YoutubeClient {
    fn resolve_handle(&self, channel_id: &str) -> Result<Option<String>> {
        Ok(self.fetch_channel(channel_id)?.and_then(|channel| channel.handle()))
    }
}
