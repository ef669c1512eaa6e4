use std::env;

/// Placeholder used when `MODEL_API_URL` is not set.
pub const DEFAULT_MODEL_API_URL: &str = "https://your-api-url.com";

/// Runtime configuration, resolved once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the text-generation service; `/generate` is appended.
    pub model_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model_api_url = lookup("MODEL_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_API_URL.to_string());
        Self { model_api_url }
    }
}
