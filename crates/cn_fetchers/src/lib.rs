pub mod clients;
pub mod logging;
#[cfg(test)]
pub(crate) mod test_utils;

pub use clients::{CricApiClient, NewsApiClient};
pub use logging::{init_logging, Logger};

pub mod prelude {
    pub use super::clients::{CricApiClient, NewsApiClient};
    pub use cn_core::{Article, Error, Match, MatchSource, NewsQuery, NewsSource, Result};
}
