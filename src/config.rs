use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default = "default_trends")]
    pub trends: Vec<TrendConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            profile: ProfileConfig::default(),
            feed: FeedConfig::default(),
            trends: default_trends(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_start_path")]
    pub start_path: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendConfig {
    pub topic: String,
    #[serde(default)]
    pub posts: Option<String>,
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_trends() -> Vec<TrendConfig> {
    vec![
        TrendConfig {
            topic: "Rust".to_string(),
            posts: Some("12.1K".to_string()),
        },
        TrendConfig {
            topic: "ratatui".to_string(),
            posts: Some("2,048".to_string()),
        },
        TrendConfig {
            topic: "Terminal".to_string(),
            posts: None,
        },
    ]
}

pub const DEFAULT_CONFIG: &str = r#"# xfeed configuration

[general]
# Route shown at startup: /, /explore/..., /notifications/..., /profile/...
start_path = "/"
# Input poll interval in milliseconds
tick_rate_ms = 250

[profile]
# username = "Jane Doe"
# handle = "@jane"

[feed]
# Local feed file: a .json tweet export or the plain text format
# path = "~/feed.txt"

[[trends]]
topic = "Rust"
posts = "12.1K"

[[trends]]
topic = "ratatui"
posts = "2,048"

[[trends]]
topic = "Terminal"
"#;

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("xfeed")
            .join("config.toml")
    }

    /// Write [`DEFAULT_CONFIG`] to `path`. Refuses to overwrite unless `force`.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "config already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Feed path with a leading `~` expanded.
    pub fn feed_path(&self) -> Option<PathBuf> {
        let path = self.feed.path.as_ref()?;
        match path.strip_prefix("~") {
            Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
            Err(_) => Some(path.clone()),
        }
    }
}
