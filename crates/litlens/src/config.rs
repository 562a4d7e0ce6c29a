//! Configuration for the litlens CLI.

use std::time::Duration;

/// Gemini API constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Gemini generative language API.
    pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Default model used for analysis, comparison, and chat.
    pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

    /// Request timeout. Model calls are synchronous from the user's point of
    /// view, so this bounds how long a single action can block.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum tokens requested per completion.
    pub const MAX_OUTPUT_TOKENS: u32 = 4096;

    /// Sampling temperature for all prompts.
    pub const TEMPERATURE: f64 = 0.7;
}

/// Prompt and orchestration limits.
pub mod limits {
    /// Characters of paper text embedded in a single-paper analysis prompt.
    pub const SINGLE_PAPER_CHARS: usize = 8000;

    /// Characters of paper text embedded per document in a comparison prompt.
    pub const COMPARISON_PAPER_CHARS: usize = 4000;

    /// Minimum number of papers accepted for comparison.
    pub const MIN_COMPARISON_PAPERS: usize = 2;

    /// Maximum number of papers accepted for comparison.
    pub const MAX_COMPARISON_PAPERS: usize = 5;
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key (required).
    pub api_key: String,

    /// Model name (e.g., "gemini-1.5-flash").
    pub model: String,

    /// API base URL (overridable for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: api::DEFAULT_MODEL.to_string(),
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            model: api::DEFAULT_MODEL.to_string(),
            api_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; its absence is a fatal startup
    /// condition. `GEMINI_MODEL` optionally overrides the default model.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is not set; set it in the environment or a .env file"))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new("key".to_string());
        assert_eq!(config.model, api::DEFAULT_MODEL);
        assert_eq!(config.api_url, api::BASE_URL);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://localhost:9999");
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.api_key, "test-key");
    }

    #[test]
    fn test_limits() {
        assert_eq!(limits::SINGLE_PAPER_CHARS, 8000);
        assert_eq!(limits::COMPARISON_PAPER_CHARS, 4000);
        assert!(limits::MIN_COMPARISON_PAPERS < limits::MAX_COMPARISON_PAPERS);
    }
}
