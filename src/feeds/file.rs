use super::{export, text, FeedData, FeedFetcher};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// Loads posts from a local feed file: `.json` tweet exports or the plain
/// text format.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

#[async_trait]
impl FeedFetcher for FileFetcher {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<FeedData> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read feed file {}", self.path.display()))?;

        let posts = if self.is_json() {
            export::parse_export(&contents, Utc::now())?
        } else {
            text::parse_posts(&contents)
        };

        info!(path = %self.path.display(), count = posts.len(), "loaded feed file");
        Ok(FeedData::Posts(posts))
    }
}
