use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// The provider credential itself is deliberately absent: `GeminiClient`
/// reads it on every generation attempt so a missing key surfaces as a
/// per-attempt configuration error instead of a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the environment variable that holds the Gemini API key.
    pub gemini_api_key_var: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key_var: env_or("GEMINI_API_KEY_VAR", "GEMINI_API_KEY"),
            gemini_base_url: env_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_to_default() {
        std::env::remove_var("RESUME_CONFIG_TEST_UNSET");
        assert_eq!(env_or("RESUME_CONFIG_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_env_or_prefers_set_value() {
        std::env::set_var("RESUME_CONFIG_TEST_SET", "from-env");
        assert_eq!(env_or("RESUME_CONFIG_TEST_SET", "fallback"), "from-env");
    }
}
