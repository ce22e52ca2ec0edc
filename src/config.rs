use std::env;

use crate::provider::GEMINI_BASE_URL;
use crate::types::DEFAULT_EMBEDDING_MODEL;

pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout: u64,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            api_key: env::var("GEMINI_API_KEY").ok(),
            base_url: from_env_default("GEMINI_BASE_URL", GEMINI_BASE_URL),
            model: from_env_default("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            // seconds to wait for the remote service before giving up on the exchange
            request_timeout: from_env_default("EMBEDDING_REQUEST_TIMEOUT", "30")
                .parse()
                .unwrap(),
        }
    }
}

/// source a variable from environment - use default if not exists
pub fn from_env_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
