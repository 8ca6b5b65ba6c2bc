pub mod config;
pub mod error;
pub mod query;
pub mod source;
pub mod types;

pub use config::{AppConfig, CricketApiConfig, NewsApiConfig, SessionLimits};
pub use error::{Error, Result};
pub use query::{NewsQuery, QueryStyle};
pub use source::{MatchSource, NewsSource};
pub use types::{Article, Match, TeamList};
