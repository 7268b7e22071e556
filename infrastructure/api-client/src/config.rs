use getset::Getters;
use serde::*;

/// Connection settings of the backend.
#[derive(Deserialize, Serialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    base_url: String,
    /// Whole-request timeout.
    #[serde(default = "ApiConfig::default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default = "ApiConfig::default_user_agent")]
    user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl ApiConfig {
    fn default_base_url() -> String {
        "http://localhost:8000".to_string()
    }
    fn default_timeout_secs() -> u64 {
        30
    }
    fn default_user_agent() -> String {
        "gearguard-console".to_string()
    }
}
