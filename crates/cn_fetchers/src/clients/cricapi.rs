use async_trait::async_trait;
use cn_core::{CricketApiConfig, Match, MatchSource, Result};
use serde::Deserialize;
use url::Url;
use crate::clients::utils;
use crate::logging::Logger;

const ENDPOINT: &str = "cricapi";

#[derive(Debug, Deserialize)]
struct CurrentMatchesResponse {
    #[serde(default)]
    data: Option<Vec<Match>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// Client for CricAPI's `currentMatches` endpoint.
pub struct CricApiClient {
    client: reqwest::Client,
    config: CricketApiConfig,
    logger: Logger,
}

impl CricApiClient {
    pub fn new(config: CricketApiConfig) -> Result<Self> {
        Ok(Self {
            client: utils::http_client()?,
            config,
            logger: Logger::new().with_prefix(format!("[{}]", ENDPOINT)),
        })
    }

    pub fn current_matches_url(&self) -> Result<Url> {
        utils::endpoint_url(
            &self.config.base_url,
            "currentMatches",
            &[
                ("apikey", self.config.api_key.clone()),
                ("offset", self.config.offset.to_string()),
            ],
        )
    }
}

#[async_trait]
impl MatchSource for CricApiClient {
    fn name(&self) -> &str {
        ENDPOINT
    }

    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        let url = self.current_matches_url()?;
        self.logger.debug(&format!("GET {}/currentMatches offset={}", self.config.base_url, self.config.offset));

        let response = self.client.get(url).send().await?;
        let body: CurrentMatchesResponse = utils::read_json(response, ENDPOINT).await?;

        // CricAPI reports some failures (bad key, quota) with a 200 and no data.
        if body.status.as_deref() == Some("failure") {
            self.logger.warn(&format!(
                "API reported failure: {}",
                body.reason.as_deref().unwrap_or("no reason given")
            ));
        }

        let matches = body.data.unwrap_or_default();
        self.logger.info(&format!("🏏 Fetched {} match records", matches.len()));
        Ok(matches)
    }
}
