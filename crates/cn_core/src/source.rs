use async_trait::async_trait;
use crate::query::NewsQuery;
use crate::types::{Article, Match};
use crate::Result;

#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch the current match records, in the order the API returns them
    async fn fetch_matches(&self) -> Result<Vec<Match>>;
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch one page of articles for the given query
    async fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<Article>>;
}
