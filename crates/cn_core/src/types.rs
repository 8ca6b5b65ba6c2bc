use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNKNOWN_VENUE: &str = "Unknown Venue";
pub const NO_STATUS: &str = "No status available";

/// One entry of the cricket endpoint's `data` list.
///
/// Records are parsed leniently: a `teams` value that is not an array of
/// strings is kept as `None`, and a missing or non-string `venue`/`status`
/// falls back to its default. Only records with exactly two teams are ever
/// shown, see [`Match::teams_pair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub teams: Option<Vec<String>>,
    pub venue: String,
    pub status: String,
}

impl Match {
    pub fn new(teams: Option<Vec<String>>, venue: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            teams,
            venue: venue.into(),
            status: status.into(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let teams = value.get("teams").and_then(|teams| {
            teams
                .as_array()?
                .iter()
                .map(|team| team.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        if teams.is_none() && value.get("teams").is_some() {
            tracing::debug!("Ignoring malformed teams value: {}", value["teams"]);
        }

        let text = |key: &str, default: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };

        Self {
            teams,
            venue: text("venue", UNKNOWN_VENUE),
            status: text("status", NO_STATUS),
        }
    }

    /// Both team names, if and only if the record lists exactly two.
    pub fn teams_pair(&self) -> Option<(&str, &str)> {
        match self.teams.as_deref() {
            Some([home, away]) => Some((home.as_str(), away.as_str())),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Match {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Match::from_value(&value))
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// One story returned by the news endpoint.
/// A null or missing `title`/`url` becomes an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

impl<'de> Deserialize<'de> for Article {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawArticle::deserialize(deserializer)?;
        Ok(Self {
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        })
    }
}

/// Flattened team names offered for selection, in encounter order.
/// Duplicates are kept on purpose: a team playing twice is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamList {
    teams: Vec<String>,
}

impl TeamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends both teams of a qualifying match. Returns false and leaves the
    /// list untouched when the match does not have exactly two teams.
    pub fn push_match(&mut self, m: &Match) -> bool {
        match m.teams_pair() {
            Some((home, away)) => {
                self.teams.push(home.to_string());
                self.teams.push(away.to_string());
                true
            }
            None => false,
        }
    }

    /// 1-based lookup.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.teams.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_defaults() {
        let m = Match::from_value(&json!({ "teams": ["India", "Australia"] }));
        assert_eq!(m.venue, UNKNOWN_VENUE);
        assert_eq!(m.status, NO_STATUS);
        assert_eq!(m.teams_pair(), Some(("India", "Australia")));
    }

    #[test]
    fn test_match_malformed_teams() {
        let cases = [
            json!({ "teams": "India vs Australia" }),
            json!({ "teams": ["India", 7] }),
            json!({ "teams": null }),
            json!({ "venue": "Lord's" }),
            json!("not an object"),
        ];
        for case in cases {
            let m = Match::from_value(&case);
            assert!(m.teams.is_none(), "expected no teams for {case}");
            assert!(m.teams_pair().is_none());
        }
    }

    #[test]
    fn test_match_needs_exactly_two_teams() {
        let one = Match::from_value(&json!({ "teams": ["India"] }));
        let three = Match::from_value(&json!({ "teams": ["A", "B", "C"] }));
        assert_eq!(one.teams.as_ref().map(Vec::len), Some(1));
        assert!(one.teams_pair().is_none());
        assert!(three.teams_pair().is_none());
    }

    #[test]
    fn test_match_non_string_venue_uses_default() {
        let m = Match::from_value(&json!({
            "teams": ["Nepal", "Oman"],
            "venue": 42,
            "status": "Nepal won by 5 wkts"
        }));
        assert_eq!(m.venue, UNKNOWN_VENUE);
        assert_eq!(m.status, "Nepal won by 5 wkts");
    }

    #[test]
    fn test_match_deserialize() {
        let matches: Vec<Match> = serde_json::from_value(json!([
            { "teams": ["England", "Pakistan"], "venue": "The Oval", "status": "Live" },
            { "teams": 5 }
        ]))
        .unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].venue, "The Oval");
        assert!(matches[1].teams.is_none());
    }

    #[test]
    fn test_article_null_fields() {
        let article: Article = serde_json::from_value(json!({ "title": null, "source": {} })).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
    }

    #[test]
    fn test_team_list() {
        let mut teams = TeamList::new();
        assert!(teams.push_match(&Match::new(Some(vec!["India".into(), "Australia".into()]), UNKNOWN_VENUE, NO_STATUS)));
        assert!(!teams.push_match(&Match::new(None, UNKNOWN_VENUE, NO_STATUS)));
        assert!(teams.push_match(&Match::new(Some(vec!["India".into(), "Sri Lanka".into()]), UNKNOWN_VENUE, NO_STATUS)));

        assert_eq!(teams.len(), 4);
        assert_eq!(teams.iter().collect::<Vec<_>>(), vec!["India", "Australia", "India", "Sri Lanka"]);
        assert_eq!(teams.get(1), Some("India"));
        assert_eq!(teams.get(4), Some("Sri Lanka"));
        assert_eq!(teams.get(0), None);
        assert_eq!(teams.get(5), None);
    }
}
