use std::io::{BufRead, Write};
use cn_core::{Article, Match, MatchSource, NewsQuery, NewsSource, Result, SessionLimits};
use tracing::{error, info, warn};
use crate::messages;
use crate::presenter::{MatchPresenter, NewsPresenter};
use crate::prompt::SelectionPrompt;

/// What one run did, for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    pub matches_fetched: usize,
    pub matches_listed: usize,
    pub teams_offered: usize,
    pub selected_team: Option<String>,
    /// `None` when the selection-driven lookup did not run or failed.
    pub headlines: Option<usize>,
}

/// One pass of the interactive flow:
///
/// 1. fetch current matches and list the first 20,
/// 2. show exploratory news for the configured team,
/// 3. list the first 5 matches again, collecting their teams,
/// 4. ask for a team and show its headlines.
///
/// Fetch failures print a warning and carry on with an empty result. Only
/// I/O errors on the session's input or output end the run early.
pub struct Session<M, N> {
    matches: M,
    news: N,
    limits: SessionLimits,
}

impl<M: MatchSource, N: NewsSource> Session<M, N> {
    pub fn new(matches: M, news: N, limits: SessionLimits) -> Self {
        Self { matches, news, limits }
    }

    pub fn into_sources(self) -> (M, N) {
        (self.matches, self.news)
    }

    async fn load_matches<W: Write>(&self, out: &mut W) -> Result<Vec<Match>> {
        match self.matches.fetch_matches().await {
            Ok(matches) => Ok(matches),
            Err(e) => {
                if e.is_http_status() {
                    warn!("{} request failed: {}", self.matches.name(), e);
                } else {
                    error!("{} unreachable or unreadable: {}", self.matches.name(), e);
                }
                writeln!(out, "{}", messages::CRICKET_FETCH_FAILED)?;
                Ok(Vec::new())
            }
        }
    }

    async fn load_news<W: Write>(&self, out: &mut W, query: &NewsQuery) -> Result<Option<Vec<Article>>> {
        match self.news.fetch_news(query).await {
            Ok(articles) => Ok(Some(articles)),
            Err(e) => {
                if e.is_http_status() {
                    warn!("{} request for {} failed: {}", self.news.name(), query, e);
                } else {
                    error!("{} unreachable or unreadable for {}: {}", self.news.name(), query, e);
                }
                writeln!(out, "{}", messages::NEWS_FETCH_FAILED)?;
                Ok(None)
            }
        }
    }

    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<SessionOutcome> {
        let mut outcome = SessionOutcome::default();

        let matches = self.load_matches(out).await?;
        outcome.matches_fetched = matches.len();
        let presenter = MatchPresenter::new(&matches);
        outcome.matches_listed = presenter.render(out, self.limits.match_display)?;

        let explore = NewsQuery::exploratory(self.limits.explore_team.as_str(), self.limits.explore_page_size);
        let articles = self.load_news(out, &explore).await?.unwrap_or_default();
        NewsPresenter::new(&explore.team, explore.style).render(out, &articles)?;

        let teams = presenter.render_selectable(out, self.limits.selection_matches)?;
        outcome.teams_offered = teams.len();
        info!("🏏 Offering {} teams for selection", teams.len());

        // An empty team name from the API counts as no selection.
        let choice = SelectionPrompt::new(&teams)
            .run(input, out)?
            .filter(|team| !team.is_empty());
        let Some(team) = choice else {
            writeln!(out, "{}", messages::NO_TEAM_SELECTED)?;
            out.flush()?;
            return Ok(outcome);
        };
        outcome.selected_team = Some(team.to_string());

        let query = NewsQuery::exact(team, self.limits.selection_page_size);
        if let Some(articles) = self.load_news(out, &query).await? {
            NewsPresenter::new(team, query.style).render(out, &articles)?;
            outcome.headlines = Some(articles.len());
        }
        out.flush()?;

        Ok(outcome)
    }
}
