use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}{}", detail(.message))]
    Http {
        endpoint: &'static str,
        status: u16,
        message: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the upstream API answered, but with a non-success status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Error::Http { .. })
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = Error::Http {
            endpoint: "newsapi",
            status: 401,
            message: Some("Your API key is invalid.".to_string()),
        };
        assert_eq!(err.to_string(), "newsapi returned HTTP 401: Your API key is invalid.");
        assert!(err.is_http_status());

        let err = Error::Http {
            endpoint: "cricapi",
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "cricapi returned HTTP 500");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("CRICKET_API_KEY is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: CRICKET_API_KEY is not set");
        assert!(!err.is_http_status());
    }
}
