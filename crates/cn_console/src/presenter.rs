use std::io::{self, Write};
use cn_core::{Article, Match, QueryStyle, TeamList};

pub const MATCHES_HEADER: &str = "=== Live Cricket Matches ===";

/// Renders match listings.
///
/// Numbering follows the record's position among the fetched records, so a
/// skipped record leaves a gap rather than shifting later numbers.
pub struct MatchPresenter<'a> {
    matches: &'a [Match],
}

impl<'a> MatchPresenter<'a> {
    pub fn new(matches: &'a [Match]) -> Self {
        Self { matches }
    }

    fn qualifying(&self, limit: usize) -> impl Iterator<Item = (usize, &'a Match)> {
        self.matches
            .iter()
            .take(limit)
            .enumerate()
            .filter(|(_, m)| m.teams_pair().is_some())
            .map(|(i, m)| (i + 1, m))
    }

    fn write_line<W: Write>(out: &mut W, number: usize, m: &Match) -> io::Result<()> {
        if let Some((home, away)) = m.teams_pair() {
            writeln!(out, "{}. {} vs {} — {} ({})", number, home, away, m.venue, m.status)?;
        }
        Ok(())
    }

    /// Prints the header and the qualifying matches among the first `limit`.
    /// Returns how many were printed.
    pub fn render<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<usize> {
        writeln!(out, "{}", MATCHES_HEADER)?;
        let mut shown = 0;
        for (number, m) in self.qualifying(limit) {
            Self::write_line(out, number, m)?;
            shown += 1;
        }
        Ok(shown)
    }

    /// Like [`render`](Self::render), also collecting both teams of every
    /// printed match into the selectable list.
    pub fn render_selectable<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<TeamList> {
        writeln!(out, "{}", MATCHES_HEADER)?;
        let mut teams = TeamList::new();
        for (number, m) in self.qualifying(limit) {
            Self::write_line(out, number, m)?;
            teams.push_match(m);
        }
        Ok(teams)
    }
}

/// Renders the articles returned for one team.
pub struct NewsPresenter<'a> {
    team: &'a str,
    style: QueryStyle,
}

impl<'a> NewsPresenter<'a> {
    pub fn new(team: &'a str, style: QueryStyle) -> Self {
        Self { team, style }
    }

    pub fn header(&self) -> String {
        match self.style {
            QueryStyle::Exploratory => format!("\n📰 Latest news about {}:", self.team),
            QueryStyle::Exact => format!("\n📰 Latest headlines for {}:", self.team),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self.style {
            QueryStyle::Exploratory => "   No news found.",
            QueryStyle::Exact => "No recent news found.",
        }
    }

    pub fn render<W: Write>(&self, out: &mut W, articles: &[Article]) -> io::Result<()> {
        writeln!(out, "{}", self.header())?;
        if articles.is_empty() {
            writeln!(out, "{}", self.empty_message())?;
            return Ok(());
        }
        for article in articles {
            writeln!(out, " - {} ({})", article.title, article.url)?;
        }
        Ok(())
    }
}
