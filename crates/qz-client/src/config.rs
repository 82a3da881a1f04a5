use serde::Deserialize;

/// Default location of the topics backend
pub const DEFAULT_API_URL: &str = "http://localhost:8181";

/// Client configuration, read from `QUIZ_`-prefixed environment variables
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend (`QUIZ_API_URL`)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds (`QUIZ_REQUEST_TIMEOUT_SECS`); none when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("QUIZ_").from_env()
    }
}
