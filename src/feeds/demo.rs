use super::{FeedData, FeedFetcher, Post};
use anyhow::Result;
use async_trait::async_trait;

/// Built-in posts used when no feed file is configured.
pub struct DemoFetcher;

pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            username: Some("Ferris".to_string()),
            handle: Some("@ferris".to_string()),
            timestamp: Some("12m".to_string()),
            ..Post::new(
                "demo-1",
                "Borrow checker and I finally agree on something. Shipping it.",
            )
        },
        Post {
            username: Some("Terminal Enjoyer".to_string()),
            handle: Some("@tty".to_string()),
            ..Post::new("demo-2", "Who needs a browser when you have 80 columns?")
        },
        Post::new(
            "demo-3",
            "Posted without a name, a handle or a timestamp. Still counts.",
        ),
        Post {
            username: Some("Release Bot".to_string()),
            handle: Some("@releases".to_string()),
            timestamp: Some("1d".to_string()),
            avatar_url: Some("/img/bot.png".to_string()),
            ..Post::new("demo-4", "v0.1.0 is out. Like and retweet responsibly.")
        },
    ]
}

#[async_trait]
impl FeedFetcher for DemoFetcher {
    fn name(&self) -> &str {
        "demo"
    }

    async fn fetch(&self) -> Result<FeedData> {
        Ok(FeedData::Posts(demo_posts()))
    }
}
