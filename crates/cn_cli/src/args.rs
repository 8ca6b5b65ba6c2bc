use clap::Parser;
use cn_core::config::{DEFAULT_CRICKET_BASE_URL, DEFAULT_EXPLORE_TEAM, DEFAULT_NEWS_BASE_URL};
use cn_core::{AppConfig, CricketApiConfig, Error, NewsApiConfig, Result};

/// Live cricket matches and the latest headlines for the team you pick.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CricAPI key
    #[arg(long, env = "CRICKET_API_KEY", hide_env_values = true)]
    pub cricket_api_key: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    #[arg(long, env = "CRICNEWS_CRICKET_BASE_URL", default_value = DEFAULT_CRICKET_BASE_URL)]
    pub cricket_base_url: String,

    #[arg(long, env = "CRICNEWS_NEWS_BASE_URL", default_value = DEFAULT_NEWS_BASE_URL)]
    pub news_base_url: String,

    /// Team used for the sample headlines shown before the selection prompt
    #[arg(long, env = "CRICNEWS_EXPLORE_TEAM", default_value = DEFAULT_EXPLORE_TEAM)]
    pub explore_team: String,
}

fn required(value: Option<String>, var: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set (use --{} or the environment)", var, var.to_lowercase().replace('_', "-"))))
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig> {
        let cricket = CricketApiConfig::new(required(self.cricket_api_key, "CRICKET_API_KEY")?)
            .with_base_url(self.cricket_base_url);
        let news = NewsApiConfig::new(required(self.news_api_key, "NEWS_API_KEY")?)
            .with_base_url(self.news_base_url);

        let mut config = AppConfig::new(cricket, news);
        config.limits.explore_team = self.explore_team;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_config() {
        let cli = Cli::try_parse_from([
            "cricnews",
            "--cricket-api-key", "cric",
            "--news-api-key", "news",
            "--news-base-url", "http://localhost:8080/v2",
            "--explore-team", "New Zealand",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.cricket.api_key, "cric");
        assert_eq!(config.news.api_key, "news");
        assert_eq!(config.news.base_url, "http://localhost:8080/v2");
        assert_eq!(config.limits.explore_team, "New Zealand");
    }

    #[test]
    fn test_blank_key_is_config_error() {
        let cli = Cli::try_parse_from([
            "cricnews",
            "--cricket-api-key", "cric",
            "--news-api-key", " ",
        ])
        .unwrap();
        match cli.into_config() {
            Err(Error::Config(msg)) => assert!(msg.contains("--news-api-key")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_base_url() {
        let cli = Cli::try_parse_from([
            "cricnews",
            "--cricket-api-key", "cric",
            "--news-api-key", "news",
            "--cricket-base-url", "api.cricapi.com",
        ])
        .unwrap();
        assert!(matches!(cli.into_config(), Err(Error::InvalidUrl(_))));
    }
}
