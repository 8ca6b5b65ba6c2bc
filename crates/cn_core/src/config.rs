use std::fmt;
use url::Url;
use crate::{Error, Result};

pub const DEFAULT_CRICKET_BASE_URL: &str = "https://api.cricapi.com/v1";
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_EXPLORE_TEAM: &str = "India";

#[derive(Clone)]
pub struct CricketApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub offset: u32,
}

impl CricketApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_CRICKET_BASE_URL.to_string(),
            api_key: api_key.into(),
            offset: 0,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for CricketApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CricketApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("offset", &self.offset)
            .finish()
    }
}

#[derive(Clone)]
pub struct NewsApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    pub sort_by: String,
}

impl NewsApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .finish()
    }
}

/// Fixed bounds of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLimits {
    /// Records shown in the first match listing.
    pub match_display: usize,
    /// Records considered when building the selectable team list.
    pub selection_matches: usize,
    pub explore_team: String,
    pub explore_page_size: u32,
    pub selection_page_size: u32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            match_display: 20,
            selection_matches: 5,
            explore_team: DEFAULT_EXPLORE_TEAM.to_string(),
            explore_page_size: 3,
            selection_page_size: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cricket: CricketApiConfig,
    pub news: NewsApiConfig,
    pub limits: SessionLimits,
}

impl AppConfig {
    pub fn new(cricket: CricketApiConfig, news: NewsApiConfig) -> Self {
        Self {
            cricket,
            news,
            limits: SessionLimits::default(),
        }
    }

    /// Rejects blank keys, unusable base URLs and an empty exploratory team
    /// before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.cricket.api_key.trim().is_empty() {
            return Err(Error::Config("cricket API key is empty".to_string()));
        }
        if self.news.api_key.trim().is_empty() {
            return Err(Error::Config("news API key is empty".to_string()));
        }
        Url::parse(&self.cricket.base_url)?;
        Url::parse(&self.news.base_url)?;
        if self.limits.explore_team.trim().is_empty() {
            return Err(Error::Config("exploratory team must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::new(CricketApiConfig::new("cric-key"), NewsApiConfig::new("news-key"))
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.cricket.base_url, DEFAULT_CRICKET_BASE_URL);
        assert_eq!(config.cricket.offset, 0);
        assert_eq!(config.news.language, "en");
        assert_eq!(config.news.sort_by, "publishedAt");
        assert_eq!(config.limits.match_display, 20);
        assert_eq!(config.limits.selection_matches, 5);
        assert_eq!(config.limits.explore_page_size, 3);
        assert_eq!(config.limits.selection_page_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_keys() {
        let mut config = config();
        config.news.api_key = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = config();
        config.cricket = config.cricket.with_base_url("not a url");
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("cric-key"));
        assert!(!debug.contains("news-key"));
        assert!(debug.contains("<redacted>"));
    }
}
