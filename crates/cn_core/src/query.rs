use std::fmt;

/// How the team name is turned into a news search query.
///
/// The two styles are not interchangeable: the exploratory lookup does a
/// loose keyword search while the selection lookup asks for the exact
/// team phrase. Both formats are kept as the upstream tool issues them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStyle {
    /// `<team> cricket`
    Exploratory,
    /// `"<team>" AND cricket`
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub team: String,
    pub style: QueryStyle,
    pub page_size: u32,
}

impl NewsQuery {
    pub fn exploratory(team: impl Into<String>, page_size: u32) -> Self {
        Self {
            team: team.into(),
            style: QueryStyle::Exploratory,
            page_size,
        }
    }

    pub fn exact(team: impl Into<String>, page_size: u32) -> Self {
        Self {
            team: team.into(),
            style: QueryStyle::Exact,
            page_size,
        }
    }

    /// The raw `q` parameter, before URL encoding.
    pub fn text(&self) -> String {
        match self.style {
            QueryStyle::Exploratory => format!("{} cricket", self.team),
            QueryStyle::Exact => format!("\"{}\" AND cricket", self.team),
        }
    }
}

impl fmt::Display for NewsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (pageSize={})", self.text(), self.page_size)
    }
}
