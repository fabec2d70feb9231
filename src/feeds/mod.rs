pub mod demo;
pub mod export;
pub mod file;
pub mod text;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::warn;

pub const DEFAULT_USERNAME: &str = "User Name";
pub const DEFAULT_HANDLE: &str = "@username";
pub const DEFAULT_TIMESTAMP: &str = "2h";
pub const DEFAULT_AVATAR: &str = "/src/avatar.jpg";

#[derive(Debug, Clone)]
pub struct FeedMessage {
    pub source: String,
    pub data: FeedData,
}

#[derive(Debug, Clone)]
pub enum FeedData {
    Posts(Vec<Post>),
    Error(String),
}

/// Static display data for one post. Only `content` is required; the
/// `display_*` accessors apply the fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub username: Option<String>,
    pub handle: Option<String>,
    pub timestamp: Option<String>,
    pub content: String,
    pub avatar_url: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn display_username(&self) -> &str {
        non_empty(&self.username).unwrap_or(DEFAULT_USERNAME)
    }

    pub fn display_handle(&self) -> &str {
        non_empty(&self.handle).unwrap_or(DEFAULT_HANDLE)
    }

    pub fn display_timestamp(&self) -> &str {
        non_empty(&self.timestamp).unwrap_or(DEFAULT_TIMESTAMP)
    }

    pub fn display_avatar(&self) -> &str {
        non_empty(&self.avatar_url).unwrap_or(DEFAULT_AVATAR)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Prefix `@` onto a bare handle.
pub fn normalize_handle(handle: &str) -> String {
    let handle = handle.trim();
    if handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{}", handle)
    }
}

/// Rename repeated post ids (`id`, `id-2`, `id-3`, ...) so every post gets
/// its own engagement state.
pub fn ensure_unique_ids(posts: &mut [Post]) {
    let mut seen: HashSet<String> = HashSet::new();
    for post in posts.iter_mut() {
        if seen.insert(post.id.clone()) {
            continue;
        }
        let original = post.id.clone();
        let mut n = 2;
        while seen.contains(&format!("{}-{}", original, n)) {
            n += 1;
        }
        post.id = format!("{}-{}", original, n);
        warn!(id = %original, renamed = %post.id, "duplicate post id");
        seen.insert(post.id.clone());
    }
}

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<FeedData>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let post = Post::new("1", "hello");
        assert_eq!(post.display_username(), "User Name");
        assert_eq!(post.display_handle(), "@username");
        assert_eq!(post.display_timestamp(), "2h");
        assert_eq!(post.display_avatar(), "/src/avatar.jpg");
    }

    #[test]
    fn test_empty_strings_use_fallbacks() {
        let post = Post {
            username: Some(String::new()),
            handle: Some(String::new()),
            ..Post::new("1", "hello")
        };
        assert_eq!(post.display_username(), "User Name");
        assert_eq!(post.display_handle(), "@username");
    }

    #[test]
    fn test_present_fields_win() {
        let post = Post {
            username: Some("Jane".to_string()),
            handle: Some("@jane".to_string()),
            timestamp: Some("5m".to_string()),
            avatar_url: Some("/img/jane.png".to_string()),
            ..Post::new("1", "hello")
        };
        assert_eq!(post.display_username(), "Jane");
        assert_eq!(post.display_handle(), "@jane");
        assert_eq!(post.display_timestamp(), "5m");
        assert_eq!(post.display_avatar(), "/img/jane.png");
    }

    #[test]
    fn test_ensure_unique_ids() {
        let mut posts = vec![
            Post::new("tweet-1", "a"),
            Post::new("tweet-1", "b"),
            Post::new("tweet-1-2", "c"),
            Post::new("tweet-1", "d"),
        ];
        ensure_unique_ids(&mut posts);
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["tweet-1", "tweet-1-2", "tweet-1-2-2", "tweet-1-3"]);
    }

    #[test]
    fn test_normalize_handle() {
        assert_eq!(normalize_handle("jane"), "@jane");
        assert_eq!(normalize_handle(" @jane "), "@jane");
    }
}
