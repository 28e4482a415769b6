use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://keeptradecut.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; KtcValueScraper/1.0)".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub source: SourceConfig,
    pub scraping: ScrapingConfig,
}

impl ScraperConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("KTC_BASE_URL") {
            config.source.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("SCRAPER_TIMEOUT_SECS") {
            config.scraping.request_timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "SCRAPER_TIMEOUT_SECS",
                    value: timeout.clone(),
                })?;
        }

        Ok(config)
    }
}

pub const DEFAULT_TABLE: &str = "ktc_test";

/// Where the merged rows end up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatastoreConfig {
    pub url: String,
    pub key: String,
    pub table: String,
}

impl DatastoreConfig {
    /// Reads the Supabase endpoint and key. Both are required; the
    /// `NEXT_PUBLIC_` names used by the web app are accepted as fallbacks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = first_var(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])
            .ok_or(ConfigError::MissingVar("SUPABASE_URL"))?;
        let key = first_var(&["SUPABASE_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"])
            .ok_or(ConfigError::MissingVar("SUPABASE_KEY"))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            key,
            table: table_from_env(),
        })
    }
}

pub fn table_from_env() -> String {
    env::var("KTC_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string())
}

pub fn database_url_from_env() -> Result<String, ConfigError> {
    first_var(&["DATABASE_URL"]).ok_or(ConfigError::MissingVar("DATABASE_URL"))
}

fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
