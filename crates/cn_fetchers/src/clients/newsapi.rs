use async_trait::async_trait;
use cn_core::{Article, NewsApiConfig, NewsQuery, NewsSource, Result};
use serde::Deserialize;
use url::Url;
use crate::clients::utils;
use crate::logging::Logger;

const ENDPOINT: &str = "newsapi";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    #[serde(default)]
    articles: Option<Vec<Article>>,
    #[serde(default)]
    total_results: Option<u64>,
}

/// Client for NewsAPI's `everything` search.
pub struct NewsApiClient {
    client: reqwest::Client,
    config: NewsApiConfig,
    logger: Logger,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        Ok(Self {
            client: utils::http_client()?,
            config,
            logger: Logger::new().with_prefix(format!("[{}]", ENDPOINT)),
        })
    }

    pub fn everything_url(&self, query: &NewsQuery) -> Result<Url> {
        utils::endpoint_url(
            &self.config.base_url,
            "everything",
            &[
                ("q", query.text()),
                ("apiKey", self.config.api_key.clone()),
                ("language", self.config.language.clone()),
                ("sortBy", self.config.sort_by.clone()),
                ("pageSize", query.page_size.to_string()),
            ],
        )
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        ENDPOINT
    }

    async fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let url = self.everything_url(query)?;
        self.logger.debug(&format!("GET {}/everything q={}", self.config.base_url, query));

        let response = self.client.get(url).send().await?;
        let body: EverythingResponse = utils::read_json(response, ENDPOINT).await?;

        let articles = body.articles.unwrap_or_default();
        self.logger.info(&format!(
            "📰 Fetched {} of {} articles for {}",
            articles.len(),
            body.total_results.unwrap_or(articles.len() as u64),
            query.team
        ));
        Ok(articles)
    }
}
