use super::{normalize_handle, Post};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// One entry of a JSON tweet export.
#[derive(Debug, Deserialize)]
struct ExportedTweet {
    id: u64,
    user: ExportedUser,
    text_content: String,
    #[serde(default)]
    media_content: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExportedUser {
    #[allow(dead_code)]
    id: u64,
    username: String,
}

/// Parse a JSON tweet export into posts, rendering `created_at` relative to `now`.
pub fn parse_export(json: &str, now: DateTime<Utc>) -> Result<Vec<Post>> {
    let tweets: Vec<ExportedTweet> =
        serde_json::from_str(json).context("invalid tweet export JSON")?;

    Ok(tweets
        .into_iter()
        .map(|tweet| {
            let mut content = tweet.text_content;
            if tweet.media_content.as_deref().is_some_and(|m| !m.is_empty()) {
                content.push_str(" [media]");
            }

            let timestamp = tweet
                .created_at
                .as_deref()
                .and_then(parse_created_at)
                .map(|created| relative_time(created, now));

            Post {
                username: Some(tweet.user.username.clone()),
                handle: Some(normalize_handle(&tweet.user.username)),
                timestamp,
                ..Post::new(format!("tweet-{}", tweet.id), content)
            }
        })
        .collect())
}

/// Accepts ctime (`Thu Jun 15 14:30:22 2023`) or RFC 3339.
fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, CTIME_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Short age of a post: `now`, `5m`, `2h`, `3d`, then `Jun 15`.
pub fn relative_time(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created);

    if age.num_minutes() < 1 {
        "now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else if age.num_days() < 7 {
        format!("{}d", age.num_days())
    } else {
        created.format("%b %-d").to_string()
    }
}
