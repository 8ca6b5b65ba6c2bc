pub mod cricapi;
pub mod newsapi;

pub use cricapi::CricApiClient;
pub use newsapi::NewsApiClient;

pub const USER_AGENT: &str = concat!("cricnews/", env!("CARGO_PKG_VERSION"));

/// Common utilities for the API clients
pub(crate) mod utils {
    use super::USER_AGENT;
    use cn_core::{Error, Result};
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use url::Url;

    pub fn http_client() -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
    }

    /// Joins `path` onto `base` and appends the query pairs, percent-encoding
    /// every value.
    pub fn endpoint_url(base: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    /// Pulls a human readable reason out of an API error body.
    /// NewsAPI uses `message`, CricAPI uses `reason`.
    pub fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        ["message", "reason"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }

    /// Turns a response into `T`, mapping any non-2xx status to
    /// [`Error::Http`].
    pub async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        endpoint: &'static str,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Http {
                endpoint,
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
