use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the backend aggregator. The command line and the
    /// NEWSHUB_API_URL environment variable both win over this value.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Items requested per RSS feed
    #[serde(default = "default_rss_limit")]
    pub rss_limit: u32,

    /// Stories requested from the Hacker News proxy
    #[serde(default = "default_hn_limit")]
    pub hn_limit: u32,

    /// Hacker News listing to pull from (topstories, newstories, beststories)
    #[serde(default = "default_hn_story_type")]
    pub hn_story_type: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_rss_limit() -> u32 {
    20
}

fn default_hn_limit() -> u32 {
    10
}

fn default_hn_story_type() -> String {
    "topstories".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            rss_limit: default_rss_limit(),
            hn_limit: default_hn_limit(),
            hn_story_type: default_hn_story_type(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
