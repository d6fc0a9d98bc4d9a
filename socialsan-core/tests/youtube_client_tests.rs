// socialsan-core/tests/youtube_client_tests.rs
//! Tests for `YoutubeClient` against a local mock of the YouTube Data API.

use anyhow::Result;
use mockito::{Matcher, Server};
use socialsan_core::youtube::{ChannelResolver, YoutubeClient, API_KEY_HEADER};
use socialsan_core::SocialsanError;
use test_log::test;

const CHANNELS_PATH: &str = "/youtube/v3/channels";

fn channel_body(custom_url: Option<&str>) -> String {
    let snippet = match custom_url {
        Some(url) => format!(r#", "snippet": {{ "customUrl": "{url}" }}"#),
        None => String::new(),
    };
    format!(
        r#"{{ "items": [ {{ "id": "UC123", "statistics": {{ "videoCount": "10", "subscriberCount": "2000", "viewCount": "30000" }}{snippet} }} ] }}"#
    )
}

fn channel_query(id: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("part".into(), "statistics,snippet".into()),
        Matcher::UrlEncoded("id".into(), id.into()),
    ])
}

#[test]
fn test_fetch_channel_sends_key_and_parses_response() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", CHANNELS_PATH)
        .match_query(channel_query("UC123"))
        .match_header(API_KEY_HEADER, "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(channel_body(Some("@dubdotco")))
        .create();

    let client = YoutubeClient::with_base_url("test-key", server.url());
    let channel = client.fetch_channel("UC123")?.expect("channel");

    assert_eq!(channel.id, "UC123");
    assert_eq!(channel.statistics.subscriber_count, 2000);
    assert_eq!(channel.handle().as_deref(), Some("dubdotco"));
    mock.assert();
    Ok(())
}

#[test]
fn test_resolve_handle_without_custom_url_is_none() -> Result<()> {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", CHANNELS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(channel_body(None))
        .create();

    let client = YoutubeClient::with_base_url("k", format!("{}/", server.url()));
    assert_eq!(client.resolve_handle("UC123")?, None);
    Ok(())
}

#[test]
fn test_empty_items_is_none() -> Result<()> {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", CHANNELS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{ "kind": "youtube#channelListResponse", "items": [] }"#)
        .create();

    let client = YoutubeClient::with_base_url("k", server.url());
    assert!(client.fetch_channel("missing")?.is_none());
    Ok(())
}

#[test]
fn test_error_status_is_reported_with_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", CHANNELS_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("quotaExceeded")
        .create();

    let client = YoutubeClient::with_base_url("k", server.url());
    let err = client.fetch_channel("UC123").unwrap_err();
    match err {
        SocialsanError::YoutubeApi { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "quotaExceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_json_is_an_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", CHANNELS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{ not json")
        .create();

    let client = YoutubeClient::with_base_url("k", server.url());
    assert!(matches!(client.fetch_channel("UC123"), Err(SocialsanError::Json(_))));
}
