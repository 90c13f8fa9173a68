//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables. Nested sections use `__` as the separator,
//! e.g. `AUTH__TOKEN_SECRET` or `ASSIST__MODEL`.

use serde::Deserialize;
use smartstay_assist::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Server configuration composed from section configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// PostgreSQL database connection URL. When unset, the server runs
    /// on in-memory stores instead.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Access-token configuration.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Assistant chat configuration.
    #[serde(default)]
    pub assist: AssistConfig,

    /// Accepted as a fallback for `ASSIST__API_KEY`; this is the
    /// variable name the offline notice tells users to set.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Accepted as a fallback for `ASSIST__MODEL`.
    #[serde(default)]
    pub openai_model: Option<String>,
}

/// Access-token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret the token signer keys its HMAC with.
    /// The default is for local development only.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,

    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

/// Assistant chat configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistConfig {
    /// API key for the chat backend. When unset, the assistant answers
    /// with a canned offline notice.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat model name.
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_token_secret() -> String {
    "smartstay-dev-secret".to_string()
}

fn default_token_ttl_hours() -> i64 {
    168
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value fails to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// API key for the assistant, if any is configured.
    pub fn assist_api_key(&self) -> Option<&str> {
        self.assist
            .api_key
            .as_deref()
            .or(self.openai_api_key.as_deref())
    }

    /// Chat model name, falling back to the stock default.
    pub fn assist_model(&self) -> &str {
        self.assist
            .model
            .as_deref()
            .or(self.openai_model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Chat backend base URL.
    pub fn assist_base_url(&self) -> &str {
        self.assist.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Access-token lifetime.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.auth.token_ttl_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> ServerConfig {
        ServerConfig {
            listen_addr: default_listen_addr(),
            database_url: None,
            auth: AuthConfig::default(),
            assist: AssistConfig::default(),
            openai_api_key: None,
            openai_model: None,
        }
    }

    #[test]
    fn auth_config_has_correct_defaults() {
        let auth = AuthConfig::default();
        assert_eq!(auth.token_secret, "smartstay-dev-secret");
        assert_eq!(auth.token_ttl_hours, 168);
    }

    #[test]
    fn assist_settings_fall_back_to_stock_defaults() {
        let config = bare_config();
        assert_eq!(config.assist_api_key(), None);
        assert_eq!(config.assist_model(), DEFAULT_MODEL);
        assert_eq!(config.assist_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn assist_section_wins_over_openai_fallbacks() {
        let mut config = bare_config();
        config.openai_api_key = Some("sk-legacy".to_string());
        config.openai_model = Some("gpt-4o".to_string());
        assert_eq!(config.assist_api_key(), Some("sk-legacy"));
        assert_eq!(config.assist_model(), "gpt-4o");

        config.assist.api_key = Some("sk-new".to_string());
        config.assist.model = Some("gpt-4.1-mini".to_string());
        assert_eq!(config.assist_api_key(), Some("sk-new"));
        assert_eq!(config.assist_model(), "gpt-4.1-mini");
    }

    #[test]
    fn token_ttl_converts_hours() {
        let config = bare_config();
        assert_eq!(config.token_ttl(), chrono::Duration::hours(168));
    }
}
